//! Display implementation for application messages.
//!
//! Keeps every user-facing string in one place so commands and the library
//! share wording.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryAdded(kind, id) => format!("{} saved (ID: {})", kind, id),
            Message::EntryAddFailed(kind) => format!("Failed to save {}", kind.to_lowercase()),
            Message::EntryRejected(kind) => format!("{} was not saved: its values are invalid", kind),
            Message::EntryIssue(issue) => issue.clone(),
            Message::EntryDeleted(kind, id) => format!("{} (ID: {}) deleted", kind, id),
            Message::EntryDeleteFailed(kind, id) => format!("Failed to delete {} (ID: {})", kind.to_lowercase(), id),
            Message::ConfirmDeleteEntry(kind, id) => format!("Delete {} with ID {}?", kind.to_lowercase(), id),
            Message::NoEntries(kind) => format!("No {} entries yet", kind.to_lowercase()),
            Message::NoEntriesForDate(kind, date) => format!("No {} entries for {}", kind.to_lowercase(), date),
            Message::HistoryHeader(kind) => format!("{} history", kind),
            Message::EntryCount(kind, count) => format!("{}: {} entr{}", kind, count, if *count == 1 { "y" } else { "ies" }),
            Message::UnknownActivityType(given, allowed) => format!("Unknown activity type '{}'. Choose one of: {}", given, allowed),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(date) => format!("Daily summary for {}", date),
            Message::TrendHeader(period) => format!("Weight trend ({})", period),
            Message::NoTrendData => "No measurements recorded yet".to_string(),
            Message::BmiTrendHeader => "BMI trend".to_string(),
            Message::BalanceHeader(start, end) => format!("Calories in and out from {} to {}", start, end),
            Message::BalanceTotals(intake, burned) => format!("Total: {} kcal in, {} kcal burned", intake, burned),
            Message::BurnedByTypeHeader => "Calories burned by activity type".to_string(),
            Message::NoBurnedData => "No activities with burned calories in this period".to_string(),
            Message::BmiUnavailable => "N/A".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigLocation(path) => format!("Configuration file: {}", path),
            Message::PromptDatabasePath => "Database file".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NothingToExport(kind) => format!("Nothing to export for {}", kind.to_lowercase()),

            // === DATABASE MESSAGES ===
            Message::SchemaInitFailed(path) => format!("Database setup failed for '{}'. Saving entries will not work.", path),
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::SchemaVersion(version) => format!("Database schema at version {}", version),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === GENERIC MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}'. Use YYYY-MM-DD or 'today'", value),
            Message::InvalidDateRange => "Start date must not be after end date".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
