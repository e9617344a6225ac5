use super::open_tracker;
use crate::{
    libs::{messages::Message, metrics::TrendPeriod, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TrendArgs {
    /// Bucket size of the weight trend
    #[arg(short, long, value_enum, default_value_t = TrendPeriod::Daily)]
    period: TrendPeriod,

    /// Show BMI per measurement instead of weight
    #[arg(long, conflicts_with = "period")]
    bmi: bool,
}

pub fn cmd(args: TrendArgs) -> Result<()> {
    let tracker = open_tracker()?;
    let (table, header) = if args.bmi {
        (tracker.bmi_trend(), Message::BmiTrendHeader)
    } else {
        (tracker.weight_trend(args.period), Message::TrendHeader(args.period.to_string()))
    };

    if table.is_empty() {
        msg_info!(Message::NoTrendData);
        return Ok(());
    }

    msg_print!(header, true);
    View::table(&table);
    Ok(())
}
