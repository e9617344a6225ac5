/// Every user-facing message the application prints.
///
/// Text lives in the `Display` implementation in `display.rs`; callers pass
/// variants to the `msg_*!` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryAdded(String, i64),      // kind, id
    EntryAddFailed(String),       // kind
    EntryRejected(String),        // kind
    EntryIssue(String),           // issue text
    EntryDeleted(String, i64),    // kind, id
    EntryDeleteFailed(String, i64),
    ConfirmDeleteEntry(String, i64),
    NoEntries(String),            // kind
    NoEntriesForDate(String, String),
    HistoryHeader(String),        // kind
    EntryCount(String, i64),      // kind, count
    UnknownActivityType(String, String), // given, allowed

    // === SUMMARY MESSAGES ===
    SummaryHeader(String),        // date
    TrendHeader(String),          // period
    NoTrendData,
    BmiTrendHeader,
    BalanceHeader(String, String), // start, end
    BalanceTotals(String, String), // intake, burned
    BurnedByTypeHeader,
    NoBurnedData,
    BmiUnavailable,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigLocation(String),
    PromptDatabasePath,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NothingToExport(String),

    // === DATABASE MESSAGES ===
    SchemaInitFailed(String),
    MigrationsFound(usize),
    SchemaVersion(u32),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === GENERIC MESSAGES ===
    InvalidDate(String),
    InvalidDateRange,
    OperationCancelled,
}
