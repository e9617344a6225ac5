//! Derived health metrics over the stored entries.
//!
//! All sums treat "no rows" and SQL `NULL` as zero. Table-valued metrics
//! return a [`DataTable`] that is empty when there is nothing to show.

use crate::db::activities::Activities;
use crate::db::foods::Foods;
use crate::db::measurements::Measurements;
use crate::db::water::Water;
use crate::libs::entry::EntryKind;
use crate::libs::filter::DateFilter;
use crate::libs::food::MacroSummary;
use crate::libs::formatter::INPUT_DATE_FORMAT;
use crate::libs::measurement::BmiCategory;
use crate::libs::table::{Cell, DataTable};
use crate::libs::tracker::Tracker;
use chrono::{Datelike, NaiveDate};
use rusqlite::params_from_iter;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const DAILY_TREND_COLUMNS: [&str; 2] = ["Date", "Weight (kg)"];
pub const BUCKET_TREND_COLUMNS: [&str; 2] = ["Period", "Average Weight (kg)"];
pub const BMI_TREND_COLUMNS: [&str; 2] = ["Date", "BMI"];
pub const CALORIE_BALANCE_COLUMNS: [&str; 3] = ["Date", "Intake (kcal)", "Burned (kcal)"];

/// Bucket size of the weight trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TrendPeriod {
    /// One point per measurement.
    #[default]
    Daily,
    /// Mean per ISO-8601 week.
    Weekly,
    /// Mean per calendar month.
    Monthly,
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendPeriod::Daily => "daily",
            TrendPeriod::Weekly => "weekly",
            TrendPeriod::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// Everything shown on the dashboard for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub intake_kcal: f64,
    pub burned_kcal: f64,
    /// Intake minus burned.
    pub balance_kcal: f64,
    pub water_ml: f64,
    pub macros: MacroSummary,
    /// Latest BMI and the date it was measured, regardless of `date`.
    pub latest_bmi: Option<(f64, NaiveDate)>,
    #[serde(skip)]
    pub bmi_category: Option<BmiCategory>,
}

impl Tracker {
    /// `(intake, burned)` kcal for one date.
    pub fn daily_calorie_totals(&self, date: NaiveDate) -> (f64, f64) {
        let intake = Foods::new(self.db()).calories_on(date).unwrap_or(0.0);
        let burned = Activities::new(self.db()).burned_on(date).unwrap_or(0.0);
        (intake, burned)
    }

    pub fn daily_water_total(&self, date: NaiveDate) -> f64 {
        Water::new(self.db()).total_on(date).unwrap_or(0.0)
    }

    /// BMI of the most recent measurement with its date.
    pub fn latest_bmi(&self) -> Option<(f64, NaiveDate)> {
        Measurements::new(self.db()).latest().map(|m| (m.bmi(), m.date()))
    }

    pub fn daily_macro_summary(&self, date: NaiveDate) -> MacroSummary {
        Foods::new(self.db()).macros_on(date).unwrap_or_default()
    }

    /// Weight over time, ascending.
    ///
    /// Daily trends list every measurement with columns [`DAILY_TREND_COLUMNS`];
    /// weekly and monthly trends list one mean per bucket with columns
    /// [`BUCKET_TREND_COLUMNS`].
    pub fn weight_trend(&self, period: TrendPeriod) -> DataTable {
        let weights = Measurements::new(self.db()).weights().unwrap_or_default();
        if weights.is_empty() {
            return DataTable::empty();
        }

        match period {
            TrendPeriod::Daily => {
                let mut table = DataTable::new(DAILY_TREND_COLUMNS);
                for (date, weight) in weights {
                    table.push_row(vec![Cell::from(date.format(INPUT_DATE_FORMAT).to_string()), Cell::from(weight)]);
                }
                table
            }
            TrendPeriod::Weekly | TrendPeriod::Monthly => {
                let mut table = DataTable::new(BUCKET_TREND_COLUMNS);
                for (label, mean) in bucket_weights(&weights, period) {
                    table.push_row(vec![Cell::from(label), Cell::from(mean)]);
                }
                table
            }
        }
    }

    /// BMI of every measurement, oldest first, with columns
    /// [`BMI_TREND_COLUMNS`].
    pub fn bmi_trend(&self) -> DataTable {
        let measurements = Measurements::new(self.db()).chronological().unwrap_or_default();
        if measurements.is_empty() {
            return DataTable::empty();
        }

        let mut table = DataTable::new(BMI_TREND_COLUMNS);
        for measurement in measurements {
            table.push_row(vec![
                Cell::from(measurement.date().format(INPUT_DATE_FORMAT).to_string()),
                Cell::from(measurement.bmi()),
            ]);
        }
        table
    }

    /// Calories in and out for every day from `start` to `end` inclusive.
    ///
    /// Days without entries get zeros. An inverted range yields an empty
    /// table.
    pub fn calorie_balance_range(&self, start: NaiveDate, end: NaiveDate) -> DataTable {
        if start > end {
            return DataTable::empty();
        }

        let filter = DateFilter::Between(start, end);
        let intake: BTreeMap<NaiveDate, f64> = Foods::new(self.db()).calories_by_day(&filter).unwrap_or_default().into_iter().collect();
        let burned: BTreeMap<NaiveDate, f64> =
            Activities::new(self.db()).burned_by_day(&filter).unwrap_or_default().into_iter().collect();

        let mut table = DataTable::new(CALORIE_BALANCE_COLUMNS);
        for day in start.iter_days().take_while(|day| *day <= end) {
            table.push_row(vec![
                Cell::from(day.format(INPUT_DATE_FORMAT).to_string()),
                Cell::from(intake.get(&day).copied().unwrap_or(0.0)),
                Cell::from(burned.get(&day).copied().unwrap_or(0.0)),
            ]);
        }
        table
    }

    /// Burned kcal per activity type, largest first; both bounds inclusive.
    pub fn calories_burned_by_activity_type(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DataTable {
        Activities::new(self.db()).burned_by_type(&DateFilter::range(start, end))
    }

    /// Number of stored entries of one kind, optionally on one date.
    pub fn entry_count(&self, kind: EntryKind, date: Option<NaiveDate>) -> i64 {
        let filter = DateFilter::on(date);
        let base = format!("SELECT COUNT(*) AS count FROM {}", kind.table());
        let table = self.db().fetch_table(&filter.apply(&base, ""), params_from_iter(filter.params()));
        table.get(0, "count").and_then(Cell::as_i64).unwrap_or(0)
    }

    pub fn daily_summary(&self, date: NaiveDate) -> DailySummary {
        let (intake_kcal, burned_kcal) = self.daily_calorie_totals(date);
        let latest_bmi = self.latest_bmi();
        DailySummary {
            date,
            intake_kcal,
            burned_kcal,
            balance_kcal: intake_kcal - burned_kcal,
            water_ml: self.daily_water_total(date),
            macros: self.daily_macro_summary(date),
            latest_bmi,
            bmi_category: latest_bmi.and_then(|(bmi, _)| BmiCategory::from_bmi(bmi)),
        }
    }
}

/// Groups weights into labelled buckets and averages each one.
///
/// Buckets come out in chronological order. `Daily` keeps one bucket per
/// date.
pub fn bucket_weights(weights: &[(NaiveDate, f64)], period: TrendPeriod) -> Vec<(String, f64)> {
    let mut buckets: BTreeMap<(i32, u32, u32), (f64, u32)> = BTreeMap::new();
    for (date, weight) in weights {
        let key = bucket_key(*date, period);
        let entry = buckets.entry(key).or_insert((0.0, 0));
        entry.0 += weight;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(key, (sum, count))| (bucket_label(key, period), sum / f64::from(count)))
        .collect()
}

fn bucket_key(date: NaiveDate, period: TrendPeriod) -> (i32, u32, u32) {
    match period {
        TrendPeriod::Daily => (date.year(), date.month(), date.day()),
        TrendPeriod::Weekly => {
            let week = date.iso_week();
            (week.year(), week.week(), 0)
        }
        TrendPeriod::Monthly => (date.year(), date.month(), 0),
    }
}

fn bucket_label((year, unit, day): (i32, u32, u32), period: TrendPeriod) -> String {
    match period {
        TrendPeriod::Daily => format!("{year:04}-{unit:02}-{day:02}"),
        TrendPeriod::Weekly => format!("Week {unit:02}-{year}"),
        TrendPeriod::Monthly => format!("Month {unit:02}-{year}"),
    }
}
