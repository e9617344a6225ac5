use super::{date_filter, open_tracker};
use crate::{
    libs::{filter::DateFilter, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BurnedArgs {
    /// First date, inclusive: `today` or YYYY-MM-DD
    #[arg(long)]
    from: Option<String>,

    /// Last date, inclusive: `today` or YYYY-MM-DD
    #[arg(long)]
    to: Option<String>,
}

pub fn cmd(args: BurnedArgs) -> Result<()> {
    let (start, end) = match date_filter(None, args.from.as_deref(), args.to.as_deref())? {
        DateFilter::Between(start, end) => (Some(start), Some(end)),
        DateFilter::From(start) => (Some(start), None),
        DateFilter::Until(end) => (None, Some(end)),
        _ => (None, None),
    };

    let table = open_tracker()?.calories_burned_by_activity_type(start, end);
    if table.is_empty() {
        msg_info!(Message::NoBurnedData);
        return Ok(());
    }

    msg_print!(Message::BurnedByTypeHeader, true);
    View::table(&table);
    Ok(())
}
