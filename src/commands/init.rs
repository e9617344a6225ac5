//! Application configuration initialization command.
//!
//! Runs an interactive prompt for the database location (or takes the
//! defaults with `--defaults`), saves the configuration, and creates the
//! database schema.

use crate::{
    libs::{config::Config, messages::Message, tracker::Tracker},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Save the default configuration without prompting
    #[arg(short, long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };
    let path = config.save()?;

    msg_success!(Message::ConfigSaved);
    msg_info!(Message::ConfigLocation(path.display().to_string()));

    // Schema failures are reported by the tracker itself
    Tracker::from_config(&config)?;
    Ok(())
}
