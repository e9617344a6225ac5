#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use welltrack::db::db::Db;
    use welltrack::db::schema::{ensure_schema, SchemaManager, TRACKED_TABLES};

    struct SchemaTestContext {
        temp_dir: TempDir,
    }

    impl SchemaTestContext {
        fn db(&self) -> Db {
            Db::open(self.temp_dir.path().join("welltrack.db"))
        }
    }

    impl TestContext for SchemaTestContext {
        fn setup() -> Self {
            SchemaTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn table_count(conn: &Connection, name: &str) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [name], |row| row.get(0))
            .unwrap()
    }

    fn applied_migrations(conn: &Connection) -> Vec<(u32, String)> {
        let mut stmt = conn.prepare("SELECT version, name FROM schema_migrations ORDER BY version").unwrap();
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?))).unwrap();
        let applied = rows.collect::<Result<Vec<_>, _>>().unwrap();
        applied
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_ensure_schema_creates_all_tables(ctx: &mut SchemaTestContext) {
        let db = ctx.db();
        assert!(ensure_schema(&db));

        let conn = db.connect().unwrap();
        for table in TRACKED_TABLES {
            assert_eq!(table_count(&conn, table), 1, "missing table {}", table);
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_ensure_schema_is_idempotent(ctx: &mut SchemaTestContext) {
        let db = ctx.db();
        assert!(ensure_schema(&db));
        assert!(ensure_schema(&db));

        let conn = db.connect().unwrap();
        for table in TRACKED_TABLES {
            assert_eq!(table_count(&conn, table), 1);
        }
        assert_eq!(applied_migrations(&conn).len(), SchemaManager::new().latest_version() as usize);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_run_migrations_reports_latest_version(ctx: &mut SchemaTestContext) {
        let mut conn = ctx.db().connect().unwrap();
        let manager = SchemaManager::new();

        assert_eq!(manager.run_migrations(&mut conn).unwrap(), manager.latest_version());
        assert_eq!(manager.run_migrations(&mut conn).unwrap(), manager.latest_version());
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_migration_history_in_order(ctx: &mut SchemaTestContext) {
        let db = ctx.db();
        let mut conn = db.connect().unwrap();
        let manager = SchemaManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = applied_migrations(&conn);
        assert!(!history.is_empty());
        for (i, (version, name)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
            assert!(!name.is_empty());
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_activity_note_column_added_once(ctx: &mut SchemaTestContext) {
        let db = ctx.db();
        ensure_schema(&db);
        ensure_schema(&db);

        let conn = db.connect().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM pragma_table_info('activities') WHERE name = 'note'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_check_constraints_reject_invalid_rows(ctx: &mut SchemaTestContext) {
        let db = ctx.db();
        ensure_schema(&db);

        let conn = db.connect().unwrap();
        assert!(conn
            .execute("INSERT INTO water_intake (date, amount_ml) VALUES ('2025-01-15', 0)", [])
            .is_err());
        assert!(conn
            .execute("INSERT INTO daily_notes (date, mood_scale) VALUES ('2025-01-15', 6)", [])
            .is_err());
        assert!(conn
            .execute("INSERT INTO daily_notes (date, mood_scale) VALUES ('2025-01-15', NULL)", [])
            .is_ok());
    }

    #[test]
    fn test_unreachable_database_reports_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open(temp_dir.path().join("missing").join("welltrack.db"));
        assert!(!ensure_schema(&db));
    }
}
