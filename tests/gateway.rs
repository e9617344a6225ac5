#[cfg(test)]
mod tests {
    use rusqlite::params;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use welltrack::db::db::Db;
    use welltrack::db::schema::ensure_schema;
    use welltrack::libs::error::{excerpt, StoreError, STATEMENT_EXCERPT_LEN};
    use welltrack::libs::table::Cell;

    struct GatewayTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for GatewayTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("welltrack.db"));
            assert!(ensure_schema(&db));
            GatewayTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_execute_returns_new_row_id(ctx: &mut GatewayTestContext) {
        let first = ctx.db.execute("INSERT INTO water_intake (date, amount_ml) VALUES (?1, ?2)", params!["2025-01-15", 250]);
        let second = ctx.db.execute("INSERT INTO water_intake (date, amount_ml) VALUES (?1, ?2)", params!["2025-01-15", 500]);
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_execute_failure_returns_none_and_rolls_back(ctx: &mut GatewayTestContext) {
        // CHECK(amount_ml > 0) fails
        let result = ctx.db.execute("INSERT INTO water_intake (date, amount_ml) VALUES (?1, ?2)", params!["2025-01-15", -5]);
        assert_eq!(result, None);

        let count = ctx.db.fetch_one("SELECT COUNT(*) FROM water_intake", [], |row| row.get::<_, i64>(0));
        assert_eq!(count, Some(0));
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_execute_invalid_statement_returns_none(ctx: &mut GatewayTestContext) {
        assert_eq!(ctx.db.execute("INSERT INTO no_such_table VALUES (1)", []), None);
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_fetch_one_without_rows_is_none(ctx: &mut GatewayTestContext) {
        let row = ctx.db.fetch_one("SELECT amount_ml FROM water_intake WHERE id = ?1", [42], |row| row.get::<_, i64>(0));
        assert_eq!(row, None);
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_fetch_all_maps_every_row(ctx: &mut GatewayTestContext) {
        for amount in [100, 200, 300] {
            ctx.db.execute("INSERT INTO water_intake (date, amount_ml) VALUES ('2025-01-15', ?1)", [amount]);
        }

        let amounts = ctx
            .db
            .fetch_all("SELECT amount_ml FROM water_intake ORDER BY id", [], |row| row.get::<_, i64>(0));
        assert_eq!(amounts, Some(vec![100, 200, 300]));

        let failed = ctx.db.fetch_all("SELECT nope FROM water_intake", [], |row| row.get::<_, i64>(0));
        assert_eq!(failed, None);
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_fetch_table_uses_result_column_names(ctx: &mut GatewayTestContext) {
        ctx.db.execute("INSERT INTO water_intake (date, amount_ml) VALUES ('2025-01-15', 250)", []);

        let table = ctx
            .db
            .fetch_table("SELECT date AS \"Day\", SUM(amount_ml) AS \"Total\" FROM water_intake GROUP BY date", []);
        assert_eq!(table.columns, vec!["Day", "Total"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "Day"), Some(&Cell::Text("2025-01-15".to_string())));
        assert_eq!(table.get(0, "Total").and_then(Cell::as_i64), Some(250));
    }

    #[test_context(GatewayTestContext)]
    #[test]
    fn test_fetch_table_failure_is_empty(ctx: &mut GatewayTestContext) {
        let table = ctx.db.fetch_table("SELECT * FROM no_such_table", []);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn test_unreachable_database_yields_sentinels() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open(temp_dir.path().join("missing").join("welltrack.db"));

        assert!(matches!(db.connect(), Err(StoreError::Connection { .. })));
        assert_eq!(db.execute("INSERT INTO water_intake (date, amount_ml) VALUES ('2025-01-15', 1)", []), None);
        assert_eq!(db.fetch_one("SELECT 1", [], |row| row.get::<_, i64>(0)), None);
        assert!(db.fetch_table("SELECT 1", []).is_empty());
    }

    #[test]
    fn test_excerpt_collapses_and_truncates() {
        assert_eq!(excerpt("SELECT *\n    FROM   water_intake"), "SELECT * FROM water_intake");

        let long = format!("SELECT {} FROM water_intake", "amount_ml, ".repeat(50));
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), STATEMENT_EXCERPT_LEN);
        assert!(short.starts_with("SELECT amount_ml,"));
    }
}
