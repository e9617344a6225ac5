//! Number and date formatting for presentation tables.
//!
//! ## Rounding
//!
//! Fixed-decimal values round half away from zero, so a stored weight of
//! 70.25 kg is shown as "70.3" rather than the "70.2" that binary
//! round-half-even formatting would produce.
//!
//! ```rust
//! use welltrack::libs::formatter::{format_fixed, format_date};
//! use chrono::NaiveDate;
//!
//! assert_eq!(format_fixed(70.25, 1), "70.3");
//! assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()), "09-03-2025");
//! ```

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// Date pattern shown in history tables.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Date pattern accepted on the command line and stored in the database.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats `value` with exactly `decimals` fractional digits.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    // Avoid printing "-0.0" for tiny negatives
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", decimals as usize, rounded)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a command-line date: `YYYY-MM-DD` or `today`.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

/// Parses an optional date argument.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value.map(parse_date_arg).transpose()
}

/// Formats an optional 1-5 scale value, "N/A" when absent.
pub fn format_scale(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}
