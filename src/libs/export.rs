//! Export of presentation tables to files.
//!
//! Any [`DataTable`] (a history, a trend, a per-type breakdown) can be
//! written as CSV with a header row, or as a JSON array with one object per
//! row keyed by column name.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use welltrack::libs::export::{Exporter, ExportFormat};
//! use welltrack::libs::{config::Config, entry::EntryKind, tracker::Tracker};
//!
//! let tracker = Tracker::from_config(&Config::read()?)?;
//! let table = tracker.history(EntryKind::Water, None);
//! Exporter::new(ExportFormat::Json, "water", None).export(&table)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::table::DataTable;
use anyhow::Result;
use chrono::Local;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed array of row objects.
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`.
    ///
    /// Without a path the file is named `welltrack_{name}_{timestamp}.{ext}`
    /// in the current directory.
    pub fn new(format: ExportFormat, name: &str, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "welltrack_{}_{}.{}",
                name,
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, table: &DataTable) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(table),
            ExportFormat::Json => self.export_json(table),
        }
    }

    fn export_csv(&self, table: &DataTable) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(&table.columns)?;
        for row in &table.rows {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, table: &DataTable) -> Result<()> {
        let json = serde_json::to_string_pretty(&table_to_json(table)?)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// One JSON object per row, keyed by column name.
pub fn table_to_json(table: &DataTable) -> Result<Value> {
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut object = Map::new();
        for (column, cell) in table.columns.iter().zip(row) {
            object.insert(column.clone(), serde_json::to_value(cell)?);
        }
        rows.push(Value::Object(object));
    }
    Ok(Value::Array(rows))
}
