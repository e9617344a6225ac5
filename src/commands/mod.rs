//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function. Commands only talk to the [`Tracker`]; they never touch SQL.

pub mod add;
pub mod balance;
pub mod burned;
pub mod count;
pub mod delete;
pub mod export;
pub mod history;
pub mod init;
pub mod summary;
pub mod trend;

use crate::libs::config::Config;
use crate::libs::filter::DateFilter;
use crate::libs::formatter::parse_optional_date;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log a new entry", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Show the history of one entry kind")]
    History(history::HistoryArgs),
    #[command(about = "Delete an entry by ID")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the daily summary")]
    Summary(summary::SummaryArgs),
    #[command(about = "Show the weight or BMI trend")]
    Trend(trend::TrendArgs),
    #[command(about = "Show calories in and out per day over a date range")]
    Balance(balance::BalanceArgs),
    #[command(about = "Show calories burned per activity type")]
    Burned(burned::BurnedArgs),
    #[command(about = "Count entries of one kind")]
    Count(count::CountArgs),
    #[command(about = "Export a history table to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Summary(args) => summary::cmd(args),
            Commands::Trend(args) => trend::cmd(args),
            Commands::Balance(args) => balance::cmd(args),
            Commands::Burned(args) => burned::cmd(args),
            Commands::Count(args) => count::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Tracker over the configured database.
pub(crate) fn open_tracker() -> Result<Tracker> {
    Tracker::from_config(&Config::read()?)
}

/// Builds a date filter from `--date` or `--from`/`--to` arguments.
///
/// `--date` wins over a range. A range whose start is after its end is
/// rejected.
pub(crate) fn date_filter(date: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<DateFilter> {
    if let Some(date) = parse_optional_date(date)? {
        return Ok(DateFilter::On(date));
    }
    let start = parse_optional_date(from)?;
    let end = parse_optional_date(to)?;
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            msg_bail_anyhow!(Message::InvalidDateRange);
        }
    }
    Ok(DateFilter::range(start, end))
}
