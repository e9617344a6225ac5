use super::{date_filter, open_tracker};
use crate::{
    libs::{entry::EntryKind, filter::DateFilter, formatter::format_date, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Entry kind to show
    #[arg(value_enum)]
    kind: EntryKind,

    /// Only this date: `today` or YYYY-MM-DD
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    date: Option<String>,

    /// First date of the range, inclusive
    #[arg(long)]
    from: Option<String>,

    /// Last date of the range, inclusive
    #[arg(long)]
    to: Option<String>,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let filter = date_filter(args.date.as_deref(), args.from.as_deref(), args.to.as_deref())?;
    let tracker = open_tracker()?;
    let table = tracker.history_in(args.kind, &filter);

    if table.is_empty() {
        match filter {
            DateFilter::On(date) => msg_info!(Message::NoEntriesForDate(args.kind.label().to_string(), format_date(date))),
            _ => msg_info!(Message::NoEntries(args.kind.label().to_string())),
        }
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(args.kind.label().to_string()), true);
    View::table(&table);
    Ok(())
}
