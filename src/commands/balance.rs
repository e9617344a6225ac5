use super::open_tracker;
use crate::{
    libs::{
        formatter::{format_date, format_fixed, parse_date_arg},
        messages::Message,
        metrics::CALORIE_BALANCE_COLUMNS,
        table::Cell,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::TimeDelta;
use clap::Args;

/// Days shown before `--to` when `--from` is omitted.
const DEFAULT_SPAN_DAYS: i64 = 7;

#[derive(Debug, Args)]
pub struct BalanceArgs {
    /// First date, inclusive: `today` or YYYY-MM-DD (default: a week before --to)
    #[arg(long)]
    from: Option<String>,

    /// Last date, inclusive: `today` or YYYY-MM-DD
    #[arg(long, default_value = "today")]
    to: String,
}

pub fn cmd(args: BalanceArgs) -> Result<()> {
    let end = parse_date_arg(&args.to)?;
    let start = match args.from.as_deref() {
        Some(from) => parse_date_arg(from)?,
        None => end - TimeDelta::days(DEFAULT_SPAN_DAYS),
    };
    if start > end {
        msg_bail_anyhow!(Message::InvalidDateRange);
    }

    let table = open_tracker()?.calorie_balance_range(start, end);
    let total = |column: &str| table.column(column).into_iter().filter_map(Cell::as_f64).sum::<f64>();
    let (intake, burned) = (total(CALORIE_BALANCE_COLUMNS[1]), total(CALORIE_BALANCE_COLUMNS[2]));

    msg_print!(Message::BalanceHeader(format_date(start), format_date(end)), true);
    View::table(&table);
    msg_info!(Message::BalanceTotals(format_fixed(intake, 0), format_fixed(burned, 0)));
    Ok(())
}
