//! Error types shared by the storage layer and the domain entities.
//!
//! Storage errors never cross the [`Tracker`](crate::libs::tracker::Tracker)
//! boundary: the query gateway logs them and reduces them to sentinels. They
//! exist so the gateway internals can use `?` like the rest of the crate.

use thiserror::Error;

/// Failures raised while talking to the SQLite store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or configured.
    #[error("Failed to connect to database at '{path}': {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed to prepare, execute, or commit.
    #[error("Statement failed: {source} | Query: {excerpt}")]
    Statement {
        excerpt: String,
        #[source]
        source: rusqlite::Error,
    },
}

impl StoreError {
    pub fn statement(sql: &str, source: rusqlite::Error) -> Self {
        StoreError::Statement {
            excerpt: excerpt(sql),
            source,
        }
    }
}

/// Maximum number of characters of a statement kept in log lines.
pub const STATEMENT_EXCERPT_LEN: usize = 100;

/// Collapses whitespace and truncates a statement for logging.
pub fn excerpt(sql: &str) -> String {
    let flat = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    flat.chars().take(STATEMENT_EXCERPT_LEN).collect()
}

/// A value that was coerced while constructing an entry.
///
/// Issues are recorded on the entry itself; some of them also make the
/// entry unstorable (see each entity's `is_storable`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("Weight {0} kg must be positive")]
    NonPositiveWeight(f64),

    #[error("Height {0} cm must be positive")]
    NonPositiveHeight(f64),

    #[error("Activity duration {0} min must be positive")]
    NonPositiveDuration(i64),

    #[error("Activity type was empty, using '{0}'")]
    EmptyActivityType(&'static str),

    #[error("Calories burned {0} cannot be negative, ignoring")]
    NegativeCaloriesBurned(f64),

    #[error("Calories {0} cannot be negative")]
    NegativeCalories(f64),

    #[error("{macro_name} {value} g cannot be negative, using 0")]
    NegativeMacro { macro_name: &'static str, value: f64 },

    #[error("Food description cannot be empty")]
    EmptyDescription,

    #[error("Water amount {0} ml must be positive")]
    NonPositiveWater(i64),

    #[error("{scale} scale {value} must be between 1 and 5, ignoring")]
    ScaleOutOfRange { scale: &'static str, value: i64 },
}
