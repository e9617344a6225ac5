use super::open_tracker;
use crate::{
    libs::{
        formatter::{format_date, parse_date_arg},
        messages::Message,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Day to summarize: `today` or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let date = parse_date_arg(&args.date)?;
    let summary = open_tracker()?.daily_summary(date);

    msg_print!(Message::SummaryHeader(format_date(date)), true);
    View::summary(&summary);
    Ok(())
}
