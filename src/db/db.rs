//! Query gateway over the SQLite store.
//!
//! Every operation opens a fresh connection, runs one parameterized statement,
//! and drops the connection before returning, whichever way it exits. Writes
//! run inside a transaction that is committed on success and rolled back when
//! dropped on failure.
//!
//! The public primitives never return errors. Failures are logged with a
//! truncated statement excerpt and reduced to a sentinel: `None` for
//! [`Db::execute`] and the fetch methods, an empty [`DataTable`] for
//! [`Db::fetch_table`].

use crate::libs::error::{excerpt, StoreError};
use crate::libs::table::{Cell, DataTable};
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error};

pub const DB_FILE_NAME: &str = "welltrack.db";

/// How long a connection waits on a locked database before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Db {
    /// Gateway over an explicit database file. Nothing is opened yet.
    pub fn open(path: impl Into<PathBuf>) -> Db {
        Db {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Db {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a new connection with the configured busy timeout.
    pub fn connect(&self) -> Result<Connection, StoreError> {
        let connection_error = |source| StoreError::Connection {
            path: self.path.display().to_string(),
            source,
        };
        let conn = Connection::open(&self.path).map_err(connection_error)?;
        conn.busy_timeout(self.busy_timeout).map_err(connection_error)?;
        Ok(conn)
    }

    /// Runs an INSERT/UPDATE/DELETE and commits it.
    ///
    /// Returns the connection's last inserted row id on success. Only the
    /// execution is checked: a DELETE matching no rows still succeeds.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Option<i64> {
        self.try_execute(sql, params).map_err(|e| error!("{}", e)).ok()
    }

    fn try_execute<P: Params>(&self, sql: &str, params: P) -> Result<i64, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(|e| StoreError::statement(sql, e))?;
        let affected = tx.execute(sql, params).map_err(|e| StoreError::statement(sql, e))?;
        let last_id = tx.last_insert_rowid();
        tx.commit().map_err(|e| StoreError::statement(sql, e))?;

        debug!(affected, last_id, "executed: {}", excerpt(sql));
        Ok(last_id)
    }

    /// Runs a read-only statement and maps its first row.
    ///
    /// `None` covers both "no row" and a failed query; the latter is logged.
    pub fn fetch_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Option<T>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let result = self
            .connect()
            .and_then(|conn| conn.query_row(sql, params, map).optional().map_err(|e| StoreError::statement(sql, e)));

        match result {
            Ok(row) => row,
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }

    /// Runs a read-only statement and maps every row.
    pub fn fetch_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Option<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.try_fetch_all(sql, params, map).map_err(|e| error!("{}", e)).ok()
    }

    fn try_fetch_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>, StoreError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql).map_err(|e| StoreError::statement(sql, e))?;
        let rows = stmt
            .query_map(params, map)
            .map_err(|e| StoreError::statement(sql, e))?
            .collect::<rusqlite::Result<Vec<T>>>()
            .map_err(|e| StoreError::statement(sql, e))?;
        Ok(rows)
    }

    /// Runs a read-only statement into a [`DataTable`] named after the result
    /// columns. Returns an empty table when the query fails.
    pub fn fetch_table<P: Params>(&self, sql: &str, params: P) -> DataTable {
        match self.try_fetch_table(sql, params) {
            Ok(table) => table,
            Err(e) => {
                error!("{}", e);
                DataTable::empty()
            }
        }
    }

    fn try_fetch_table<P: Params>(&self, sql: &str, params: P) -> Result<DataTable, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql).map_err(|e| StoreError::statement(sql, e))?;
        let mut table = DataTable::new(stmt.column_names());
        let width = table.columns.len();

        let mut rows = stmt.query(params).map_err(|e| StoreError::statement(sql, e))?;
        while let Some(row) = rows.next().map_err(|e| StoreError::statement(sql, e))? {
            let mut cells = Vec::with_capacity(width);
            for idx in 0..width {
                let value: Value = row.get(idx).map_err(|e| StoreError::statement(sql, e))?;
                cells.push(Cell::from(value));
            }
            table.push_row(cells);
        }

        Ok(table)
    }
}
