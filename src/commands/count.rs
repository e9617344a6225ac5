use super::open_tracker;
use crate::{
    libs::{entry::EntryKind, formatter::parse_optional_date, messages::Message},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Entry kind; every kind when omitted
    #[arg(value_enum)]
    kind: Option<EntryKind>,

    /// Only this date: `today` or YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: CountArgs) -> Result<()> {
    let date = parse_optional_date(args.date.as_deref())?;
    let tracker = open_tracker()?;

    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => EntryKind::ALL.to_vec(),
    };
    for kind in kinds {
        msg_print!(Message::EntryCount(kind.label().to_string(), tracker.entry_count(kind, date)));
    }
    Ok(())
}
