//! Core library modules for welltrack.
//!
//! ## Features
//!
//! - **Entities**: Measurements, activities, food and water intake, daily notes
//! - **Tracker**: Validated CRUD over every entry kind
//! - **Metrics**: Calorie balance, hydration, macros, BMI, weight trend
//! - **Presentation**: Tables, console rendering, formatting, export
//! - **Infrastructure**: Configuration, data storage, errors, messaging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use welltrack::libs::{config::Config, tracker::Tracker, water::WaterIntake};
//! use chrono::Local;
//!
//! let tracker = Tracker::from_config(&Config::read()?)?;
//! let mut water = WaterIntake::new(Local::now().date_naive(), 250);
//! tracker.add_water(&mut water);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod activity;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod filter;
pub mod food;
pub mod formatter;
pub mod measurement;
pub mod messages;
pub mod metrics;
pub mod note;
pub mod table;
pub mod tracker;
pub mod view;
pub mod water;
