//! History export command.
//!
//! Writes one kind's history as CSV or JSON. The `id` column is kept so an
//! export can be matched back to stored entries.

use super::{date_filter, open_tracker};
use crate::{
    libs::{
        entry::EntryKind,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Entry kind to export
    #[arg(value_enum)]
    kind: EntryKind,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; `welltrack_{kind}_{timestamp}.{ext}` when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

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

pub fn cmd(args: ExportArgs) -> Result<()> {
    let filter = date_filter(args.date.as_deref(), args.from.as_deref(), args.to.as_deref())?;
    let table = open_tracker()?.history_in(args.kind, &filter);

    if table.is_empty() {
        msg_info!(Message::NothingToExport(args.kind.label().to_string()));
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.kind.table(), args.output);
    exporter.export(&table)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
