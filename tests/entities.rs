#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use welltrack::libs::activity::{Activity, DEFAULT_ACTIVITY_TYPE};
    use welltrack::libs::entry::{Entry, EntryKind};
    use welltrack::libs::error::ValidationIssue;
    use welltrack::libs::filter::DateFilter;
    use welltrack::libs::food::FoodIntake;
    use welltrack::libs::measurement::{bmi, BmiCategory, Measurement};
    use welltrack::libs::note::DailyNote;
    use welltrack::libs::water::WaterIntake;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_measurement_coerces_each_value() {
        let m = Measurement::new(date(2025, 1, 15), -70.0, 175.0);
        assert_eq!(m.weight_kg(), 0.0);
        assert_eq!(m.height_cm(), 175.0);
        assert_eq!(m.issues(), &[ValidationIssue::NonPositiveWeight(-70.0)]);
        assert!(!m.is_storable());

        let m = Measurement::new(date(2025, 1, 15), 70.0, 0.0);
        assert_eq!(m.weight_kg(), 70.0);
        assert_eq!(m.height_cm(), 0.0);
        assert!(!m.is_storable());

        let m = Measurement::new(date(2025, 1, 15), 70.0, 175.0);
        assert!(m.issues().is_empty());
        assert!(m.is_storable());
        assert_eq!(m.id(), None);
    }

    #[test]
    fn test_bmi_formula() {
        assert!((bmi(70.0, 175.0) - 22.857).abs() < 0.001);
        assert_eq!(bmi(0.0, 175.0), 0.0);
        assert_eq!(bmi(70.0, -1.0), 0.0);
    }

    #[test]
    fn test_bmi_category_bands() {
        assert_eq!(BmiCategory::from_bmi(0.0), None);
        assert_eq!(BmiCategory::from_bmi(17.0), Some(BmiCategory::Underweight));
        assert_eq!(BmiCategory::from_bmi(18.5), Some(BmiCategory::Normal));
        assert_eq!(BmiCategory::from_bmi(25.0), Some(BmiCategory::Overweight));
        assert_eq!(BmiCategory::from_bmi(30.0), Some(BmiCategory::Obese));
        assert_eq!(BmiCategory::Normal.to_string(), "Normal");
    }

    #[test]
    fn test_activity_sanitization() {
        let a = Activity::new(date(2025, 1, 15), "  ", 30, Some(-10.0), Some("  "));
        assert_eq!(a.activity_type(), DEFAULT_ACTIVITY_TYPE);
        assert_eq!(a.calories_burned(), None);
        assert_eq!(a.note(), None);
        assert_eq!(a.issues().len(), 2);
        assert!(a.is_storable());

        let a = Activity::new(date(2025, 1, 15), "Running", -5, Some(300.0), Some("easy pace"));
        assert_eq!(a.duration_min(), 0);
        assert_eq!(a.calories_burned(), Some(300.0));
        assert_eq!(a.note(), Some("easy pace"));
        assert!(!a.is_storable());
    }

    #[test]
    fn test_food_sanitization() {
        let f = FoodIntake::new(date(2025, 1, 15), "Oatmeal", -100.0, Some(-1.0), None, Some(3.0));
        assert_eq!(f.calories(), 0.0);
        assert_eq!(f.protein_g(), 0.0);
        assert_eq!(f.carbs_g(), 0.0);
        assert_eq!(f.fat_g(), 3.0);
        assert!(f.is_storable());
        assert!(f.issues().contains(&ValidationIssue::NegativeCalories(-100.0)));

        let f = FoodIntake::new(date(2025, 1, 15), "   ", 200.0, None, None, None);
        assert_eq!(f.issues(), &[ValidationIssue::EmptyDescription]);
        assert!(!f.is_storable());
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let day = date(2025, 1, 15);

        let m = Measurement::new(day, f64::INFINITY, 175.0);
        assert_eq!(m.weight_kg(), 0.0);
        assert_eq!(m.issues(), &[ValidationIssue::NonFinite("Weight")]);
        assert!(!m.is_storable());

        let m = Measurement::new(day, 70.0, f64::NAN);
        assert_eq!(m.height_cm(), 0.0);
        assert_eq!(m.issues(), &[ValidationIssue::NonFinite("Height")]);
        assert!(!m.is_storable());

        let f = FoodIntake::new(day, "Cake", f64::INFINITY, Some(f64::NAN), None, None);
        assert_eq!(f.calories(), 0.0);
        assert_eq!(f.protein_g(), 0.0);
        assert!(f.issues().contains(&ValidationIssue::NonFinite("Calories")));
        assert!(f.issues().contains(&ValidationIssue::NonFinite("Protein")));
        assert!(!f.is_storable());

        let f = FoodIntake::new(day, "Cake", 350.0, None, Some(f64::NEG_INFINITY), None);
        assert_eq!(f.carbs_g(), 0.0);
        assert!(f.is_storable());

        let a = Activity::new(day, "Running", 30, Some(f64::INFINITY), None);
        assert_eq!(a.calories_burned(), None);
        assert_eq!(a.issues(), &[ValidationIssue::NonFinite("Calories burned")]);
        assert!(a.is_storable());
    }

    #[test]
    fn test_water_requires_positive_amount() {
        assert!(WaterIntake::new(date(2025, 1, 15), 250).is_storable());

        let w = WaterIntake::new(date(2025, 1, 15), 0);
        assert_eq!(w.amount_ml(), 0);
        assert!(!w.is_storable());
    }

    #[test]
    fn test_note_scales_outside_range_become_absent() {
        let n = DailyNote::new(date(2025, 1, 15), Some(7), Some(3), Some("  tired  "));
        assert_eq!(n.mood_scale(), None);
        assert_eq!(n.energy_scale(), Some(3));
        assert_eq!(n.note_text(), Some("tired"));
        assert_eq!(n.issues().len(), 1);
        assert!(n.is_storable());

        let n = DailyNote::new(date(2025, 1, 15), Some(0), Some(-2), None);
        assert_eq!(n.mood_scale(), None);
        assert_eq!(n.energy_scale(), None);
        assert!(n.is_storable());

        let n = DailyNote::new(date(2025, 1, 15), Some(1), Some(5), None);
        assert_eq!((n.mood_scale(), n.energy_scale()), (Some(1), Some(5)));
    }

    #[test]
    fn test_entry_wraps_every_kind() {
        let entries: Vec<Entry> = vec![
            Measurement::new(date(2025, 1, 15), 70.0, 175.0).into(),
            Activity::new(date(2025, 1, 15), "Yoga", 45, None, None).into(),
            FoodIntake::new(date(2025, 1, 15), "Apple", 95.0, None, None, None).into(),
            WaterIntake::new(date(2025, 1, 15), 250).into(),
            DailyNote::new(date(2025, 1, 15), None, None, None).into(),
        ];
        let kinds: Vec<EntryKind> = entries.iter().map(Entry::kind).collect();
        assert_eq!(kinds, EntryKind::ALL.to_vec());
        assert!(entries.iter().all(|e| e.is_storable() && e.id().is_none()));
        assert!(entries.iter().all(|e| e.date() == date(2025, 1, 15)));
    }

    #[test]
    fn test_entry_kind_tables() {
        let tables: Vec<&str> = EntryKind::ALL.iter().map(|kind| kind.table()).collect();
        assert_eq!(tables, vec!["measurements", "activities", "food_intake", "water_intake", "daily_notes"]);
    }

    #[test]
    fn test_date_filter_shapes() {
        let start = date(2025, 1, 10);
        let end = date(2025, 1, 20);

        assert_eq!(DateFilter::range(None, None), DateFilter::Any);
        assert_eq!(DateFilter::range(Some(start), None), DateFilter::From(start));
        assert_eq!(DateFilter::range(None, Some(end)), DateFilter::Until(end));
        assert_eq!(DateFilter::range(Some(start), Some(end)), DateFilter::Between(start, end));
        assert_eq!(DateFilter::on(None), DateFilter::Any);

        let between = DateFilter::Between(start, end);
        assert_eq!(between.condition(), Some("date BETWEEN ?1 AND ?2"));
        assert_eq!(between.params(), vec!["2025-01-10", "2025-01-20"]);
    }

    #[test]
    fn test_date_filter_sql() {
        let on = DateFilter::On(date(2025, 1, 15));
        assert_eq!(on.apply("SELECT * FROM t", "ORDER BY id"), "SELECT * FROM t WHERE date = ?1 ORDER BY id");
        assert_eq!(
            on.extend("SELECT * FROM t WHERE x IS NOT NULL", "GROUP BY date"),
            "SELECT * FROM t WHERE x IS NOT NULL AND date = ?1 GROUP BY date"
        );
        assert_eq!(
            on.extend("SELECT * FROM t\nWHERE x IS NOT NULL", ""),
            "SELECT * FROM t\nWHERE x IS NOT NULL AND date = ?1"
        );
        assert_eq!(DateFilter::Any.extend("SELECT * FROM t WHERE x > 0", ""), "SELECT * FROM t WHERE x > 0");
        assert_eq!(DateFilter::Any.apply("SELECT * FROM t", ""), "SELECT * FROM t");
        assert!(DateFilter::Any.params().is_empty());
    }
}
