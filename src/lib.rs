//! # Welltrack - Personal health tracking
//!
//! A command-line health log: body measurements, physical activity, food and
//! water intake, and daily mood/energy notes, stored in a local SQLite file.
//!
//! ## Features
//!
//! - **Entry Logging**: Validated entries for five independent kinds
//! - **History**: Per-kind history tables, filtered by date or date range
//! - **Metrics**: Daily calorie balance, hydration, macro totals, latest BMI
//! - **Trends**: Weight trend by day, ISO week, or month; BMI trend; calories
//!   in and out per day over a date range
//! - **Data Export**: Any table to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use welltrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
