//! Storage layer for welltrack.
//!
//! A thin layer over a single SQLite file with five independent tables, one
//! per entry kind. There are no foreign keys; entries are correlated by date
//! at query time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use welltrack::db::{db::Db, measurements::Measurements, schema::ensure_schema};
//! use welltrack::libs::{filter::DateFilter, measurement::Measurement};
//! use chrono::NaiveDate;
//!
//! let db = Db::open("welltrack.db");
//! ensure_schema(&db);
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let id = Measurements::new(&db).insert(&Measurement::new(date, 70.0, 175.0));
//! let rows = Measurements::new(&db).fetch(&DateFilter::On(date));
//! ```

/// Query gateway: connection per operation, parameterized statements,
/// sentinel results on failure.
pub mod db;

/// Versioned, idempotent creation of the tracking tables.
pub mod schema;

pub mod activities;
pub mod foods;
pub mod measurements;
pub mod notes;
pub mod water;
