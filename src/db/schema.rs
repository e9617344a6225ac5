//! Schema initialization and versioning.
//!
//! The five tracking tables are created by a short, ordered list of
//! migrations recorded in the `schema_migrations` table. Every statement uses
//! "IF NOT EXISTS" semantics, so running the initializer again against an
//! up-to-date or partially initialized file is harmless.
//!
//! Column CHECK constraints mirror the entity invariants: positive weight,
//! height, duration and water amount, non-negative calories and macros, and
//! mood/energy scales between 1 and 5.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use welltrack::db::{db::Db, schema::ensure_schema};
//!
//! let db = Db::open("welltrack.db");
//! assert!(ensure_schema(&db));
//! ```

use super::db::Db;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::{error, warn};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS schema_migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_MEASUREMENTS: &str = "CREATE TABLE IF NOT EXISTS measurements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE NOT NULL,
    weight_kg REAL NOT NULL CHECK(weight_kg > 0),
    height_cm REAL NOT NULL CHECK(height_cm > 0)
)";

const CREATE_ACTIVITIES: &str = "CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE NOT NULL,
    activity_type TEXT NOT NULL,
    duration_min INTEGER NOT NULL CHECK(duration_min > 0),
    calories_burned REAL CHECK(calories_burned IS NULL OR calories_burned >= 0)
)";

const CREATE_FOOD_INTAKE: &str = "CREATE TABLE IF NOT EXISTS food_intake (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE NOT NULL,
    description TEXT NOT NULL,
    calories REAL NOT NULL CHECK(calories >= 0),
    protein_g REAL CHECK(protein_g IS NULL OR protein_g >= 0),
    carbs_g REAL CHECK(carbs_g IS NULL OR carbs_g >= 0),
    fat_g REAL CHECK(fat_g IS NULL OR fat_g >= 0)
)";

const CREATE_WATER_INTAKE: &str = "CREATE TABLE IF NOT EXISTS water_intake (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE NOT NULL,
    amount_ml INTEGER NOT NULL CHECK(amount_ml > 0)
)";

const CREATE_DAILY_NOTES: &str = "CREATE TABLE IF NOT EXISTS daily_notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE NOT NULL,
    mood_scale INTEGER CHECK(mood_scale >= 1 AND mood_scale <= 5),
    energy_scale INTEGER CHECK(energy_scale >= 1 AND energy_scale <= 5),
    note_text TEXT
)";

/// Tables owned by the initializer, in creation order.
pub const TRACKED_TABLES: [&str; 5] = ["measurements", "activities", "food_intake", "water_intake", "daily_notes"];

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Ordered registry of schema migrations.
pub struct SchemaManager {
    migrations: Vec<Migration>,
}

impl Default for SchemaManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the five tracking tables and their date indices
        self.add_migration(1, "create_tracking_tables", |tx| {
            for ddl in [CREATE_MEASUREMENTS, CREATE_ACTIVITIES, CREATE_FOOD_INTAKE, CREATE_WATER_INTAKE, CREATE_DAILY_NOTES] {
                tx.execute(ddl, [])?;
            }
            for table in TRACKED_TABLES {
                tx.execute(&format!("CREATE INDEX IF NOT EXISTS idx_{table}_date ON {table}(date)"), [])?;
            }
            Ok(())
        });

        // Version 2: free-text note on activities
        self.add_migration(2, "add_activity_note", |tx| {
            let has_note: i64 = tx.query_row(
                "SELECT COUNT(*) FROM pragma_table_info('activities') WHERE name = 'note'",
                [],
                |row| row.get(0),
            )?;
            if has_note == 0 {
                tx.execute("ALTER TABLE activities ADD COLUMN note TEXT", [])?;
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every pending migration in one transaction and returns the
    /// resulting schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<u32> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        if current_version > self.latest_version() {
            warn!(current_version, latest = self.latest_version(), "database schema is newer than this build");
        }
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database schema is up to date");
            return Ok(current_version);
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        self.get_current_version(conn)
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

/// Makes sure all tracking tables exist.
///
/// Returns `false` (after logging) when the database cannot be opened or a
/// migration fails; callers treat that as fatal for writes.
pub fn ensure_schema(db: &Db) -> bool {
    let result = db
        .connect()
        .map_err(anyhow::Error::from)
        .and_then(|mut conn| SchemaManager::new().run_migrations(&mut conn));

    match result {
        Ok(version) => {
            msg_debug!(Message::SchemaVersion(version));
            true
        }
        Err(e) => {
            error!(path = %db.path().display(), "schema initialization failed: {:#}", e);
            false
        }
    }
}
