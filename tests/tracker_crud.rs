#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use welltrack::db::db::Db;
    use welltrack::libs::activity::Activity;
    use welltrack::libs::entry::{Entry, EntryKind};
    use welltrack::libs::filter::DateFilter;
    use welltrack::libs::food::FoodIntake;
    use welltrack::libs::measurement::Measurement;
    use welltrack::libs::note::DailyNote;
    use welltrack::libs::table::Cell;
    use welltrack::libs::tracker::Tracker;
    use welltrack::libs::water::WaterIntake;

    struct TrackerTestContext {
        _temp_dir: TempDir,
        tracker: Tracker,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tracker = Tracker::new(Db::open(temp_dir.path().join("welltrack.db")));
            TrackerTestContext {
                _temp_dir: temp_dir,
                tracker,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_add_assigns_ids(ctx: &mut TrackerTestContext) {
        assert!(ctx.tracker.schema_ready());

        let mut first = Measurement::new(date(2025, 1, 15), 70.0, 175.0);
        let mut second = Measurement::new(date(2025, 1, 16), 71.0, 175.0);
        assert!(ctx.tracker.add_measurement(&mut first));
        assert!(ctx.tracker.add_measurement(&mut second));
        assert_eq!(first.id(), Some(1));
        assert_eq!(second.id(), Some(2));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_infinite_values_never_reach_the_store(ctx: &mut TrackerTestContext) {
        let day = date(2025, 1, 15);
        assert!(!ctx.tracker.add_measurement(&mut Measurement::new(day, f64::INFINITY, 175.0)));
        assert!(!ctx.tracker.add_food(&mut FoodIntake::new(day, "Cake", f64::INFINITY, None, None, None)));

        assert_eq!(ctx.tracker.latest_bmi(), None);
        assert_eq!(ctx.tracker.daily_calorie_totals(day), (0.0, 0.0));
        assert!(ctx.tracker.measurement_history(None).is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_unstorable_entries_are_rejected(ctx: &mut TrackerTestContext) {
        let mut measurement = Measurement::new(date(2025, 1, 15), 0.0, 175.0);
        let mut activity = Activity::new(date(2025, 1, 15), "Running", 0, Some(100.0), None);
        let mut food = FoodIntake::new(date(2025, 1, 15), "", 100.0, None, None, None);
        let mut water = WaterIntake::new(date(2025, 1, 15), -250);

        assert!(!ctx.tracker.add_measurement(&mut measurement));
        assert!(!ctx.tracker.add_activity(&mut activity));
        assert!(!ctx.tracker.add_food(&mut food));
        assert!(!ctx.tracker.add_water(&mut water));
        assert_eq!(measurement.id(), None);

        for kind in EntryKind::ALL {
            assert_eq!(ctx.tracker.entry_count(kind, None), 0);
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_add_any_entry(ctx: &mut TrackerTestContext) {
        let mut entries: Vec<Entry> = vec![
            Measurement::new(date(2025, 1, 15), 70.0, 175.0).into(),
            Activity::new(date(2025, 1, 15), "Yoga", 45, None, Some("morning")).into(),
            FoodIntake::new(date(2025, 1, 15), "Apple", 95.0, Some(0.5), Some(25.0), Some(0.3)).into(),
            WaterIntake::new(date(2025, 1, 15), 250).into(),
            DailyNote::new(date(2025, 1, 15), Some(4), Some(2), Some("slept well")).into(),
        ];

        for entry in entries.iter_mut() {
            assert!(ctx.tracker.add(entry));
            assert_eq!(entry.id(), Some(1));
        }
        for kind in EntryKind::ALL {
            assert_eq!(ctx.tracker.entry_count(kind, Some(date(2025, 1, 15))), 1);
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_measurement_history_columns_and_formatting(ctx: &mut TrackerTestContext) {
        ctx.tracker.add_measurement(&mut Measurement::new(date(2025, 1, 15), 70.25, 175.0));

        let table = ctx.tracker.measurement_history(None);
        assert_eq!(table.columns, vec!["id", "Date", "Weight (kg)", "Height (cm)", "BMI"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "id"), Some(&Cell::Int(1)));
        assert_eq!(table.get(0, "Date"), Some(&text("15-01-2025")));
        assert_eq!(table.get(0, "Weight (kg)"), Some(&text("70.3")));
        assert_eq!(table.get(0, "Height (cm)"), Some(&text("175")));
        assert_eq!(table.get(0, "BMI"), Some(&text("22.94")));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_history_is_most_recent_first(ctx: &mut TrackerTestContext) {
        ctx.tracker.add_water(&mut WaterIntake::new(date(2025, 1, 14), 100));
        ctx.tracker.add_water(&mut WaterIntake::new(date(2025, 1, 15), 200));
        ctx.tracker.add_water(&mut WaterIntake::new(date(2025, 1, 15), 300));

        let table = ctx.tracker.water_history(None);
        let amounts: Vec<i64> = table.column("Amount (ml)").into_iter().filter_map(Cell::as_i64).collect();
        assert_eq!(amounts, vec![300, 200, 100]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_history_filtered_by_date(ctx: &mut TrackerTestContext) {
        ctx.tracker.add_food(&mut FoodIntake::new(date(2025, 1, 14), "Pasta", 600.0, None, None, None));
        ctx.tracker.add_food(&mut FoodIntake::new(date(2025, 1, 15), "Salad", 250.0, Some(5.0), None, None));

        let table = ctx.tracker.food_history(Some(date(2025, 1, 15)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "Description"), Some(&text("Salad")));
        assert_eq!(table.get(0, "Calories"), Some(&text("250")));
        assert_eq!(table.get(0, "Protein (g)"), Some(&text("5.0")));
        assert_eq!(table.get(0, "Carbs (g)"), Some(&text("0.0")));

        let range = ctx
            .tracker
            .history_in(EntryKind::Food, &DateFilter::Between(date(2025, 1, 1), date(2025, 1, 14)));
        assert_eq!(range.len(), 1);
        assert_eq!(range.get(0, "Description"), Some(&text("Pasta")));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_empty_history_keeps_columns(ctx: &mut TrackerTestContext) {
        let table = ctx.tracker.activity_history(Some(date(2025, 1, 15)));
        assert!(table.is_empty());
        assert_eq!(
            table.columns,
            vec!["id", "Date", "Activity Type", "Duration (min)", "Calories Burned", "Note"]
        );
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_activity_and_note_history_values(ctx: &mut TrackerTestContext) {
        ctx.tracker
            .add_activity(&mut Activity::new(date(2025, 1, 15), "Walking", 40, None, Some("with the dog")));
        ctx.tracker.add_note(&mut DailyNote::new(date(2025, 1, 15), Some(9), Some(3), None));

        let activities = ctx.tracker.activity_history(None);
        assert_eq!(activities.get(0, "Activity Type"), Some(&text("Walking")));
        assert_eq!(activities.get(0, "Duration (min)"), Some(&Cell::Int(40)));
        assert_eq!(activities.get(0, "Calories Burned"), Some(&text("0")));
        assert_eq!(activities.get(0, "Note"), Some(&text("with the dog")));

        let notes = ctx.tracker.note_history(None);
        assert_eq!(notes.get(0, "Mood (1-5)"), Some(&text("N/A")));
        assert_eq!(notes.get(0, "Energy (1-5)"), Some(&text("3")));
        assert_eq!(notes.get(0, "Note"), Some(&Cell::Null));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_removes_entry(ctx: &mut TrackerTestContext) {
        let mut note = DailyNote::new(date(2025, 1, 15), Some(3), Some(3), Some("ok"));
        ctx.tracker.add_note(&mut note);
        let id = note.id().unwrap();

        assert!(ctx.tracker.delete_note(id));
        assert!(ctx.tracker.note_history(None).is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_unknown_id_reports_success(ctx: &mut TrackerTestContext) {
        for kind in EntryKind::ALL {
            assert!(ctx.tracker.delete(kind, 9999));
        }
        assert!(ctx.tracker.delete_measurement(42));
        assert!(ctx.tracker.delete_activity(42));
        assert!(ctx.tracker.delete_food(42));
        assert!(ctx.tracker.delete_water(42));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_only_touches_one_kind(ctx: &mut TrackerTestContext) {
        ctx.tracker.add_water(&mut WaterIntake::new(date(2025, 1, 15), 250));
        ctx.tracker.add_food(&mut FoodIntake::new(date(2025, 1, 15), "Toast", 120.0, None, None, None));

        assert!(ctx.tracker.delete_water(1));
        assert_eq!(ctx.tracker.entry_count(EntryKind::Water, None), 0);
        assert_eq!(ctx.tracker.entry_count(EntryKind::Food, None), 1);
    }

    #[test]
    fn test_unreachable_database_fails_softly() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tracker = Tracker::new(Db::open(temp_dir.path().join("missing").join("welltrack.db")));

        assert!(!tracker.schema_ready());
        assert!(!tracker.add_water(&mut WaterIntake::new(date(2025, 1, 15), 250)));
        assert!(!tracker.delete_water(1));
        assert!(tracker.water_history(None).is_empty());
        assert_eq!(tracker.entry_count(EntryKind::Water, None), 0);
    }
}
