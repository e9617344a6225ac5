use super::open_tracker;
use crate::{
    libs::{entry::EntryKind, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entry kind
    #[arg(value_enum)]
    kind: EntryKind,

    /// Entry ID as shown in the history
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let kind = args.kind.label().to_string();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEntry(kind.clone(), args.id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let tracker = open_tracker()?;
    if tracker.delete(args.kind, args.id) {
        msg_success!(Message::EntryDeleted(kind, args.id));
    } else {
        msg_error!(Message::EntryDeleteFailed(kind, args.id));
    }
    Ok(())
}
