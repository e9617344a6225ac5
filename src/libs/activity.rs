//! Physical activity entries.

use crate::libs::entry::HistoryRow;
use crate::libs::error::ValidationIssue;
use crate::libs::formatter::{format_date, format_fixed};
use crate::libs::table::Cell;
use chrono::NaiveDate;
use tracing::warn;

/// Activity type used when none is given.
pub const DEFAULT_ACTIVITY_TYPE: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    id: Option<i64>,
    date: NaiveDate,
    activity_type: String,
    duration_min: i64,
    calories_burned: Option<f64>,
    note: Option<String>,
    issues: Vec<ValidationIssue>,
}

impl Activity {
    /// Builds a sanitized activity.
    ///
    /// An empty type becomes [`DEFAULT_ACTIVITY_TYPE`], a non-positive
    /// duration becomes 0 (and makes the activity unstorable), and negative
    /// or non-finite burned calories are dropped.
    pub fn new(date: NaiveDate, activity_type: &str, duration_min: i64, calories_burned: Option<f64>, note: Option<&str>) -> Self {
        let mut issues = Vec::new();

        let activity_type = match activity_type.trim() {
            "" => {
                issues.push(ValidationIssue::EmptyActivityType(DEFAULT_ACTIVITY_TYPE));
                DEFAULT_ACTIVITY_TYPE.to_string()
            }
            t => t.to_string(),
        };

        let duration_min = if duration_min > 0 {
            duration_min
        } else {
            issues.push(ValidationIssue::NonPositiveDuration(duration_min));
            0
        };

        let calories_burned = match calories_burned {
            Some(kcal) if !kcal.is_finite() => {
                issues.push(ValidationIssue::NonFinite("Calories burned"));
                None
            }
            Some(kcal) if kcal >= 0.0 => Some(kcal),
            Some(kcal) => {
                issues.push(ValidationIssue::NegativeCaloriesBurned(kcal));
                None
            }
            None => None,
        };

        let note = note.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string);

        for issue in &issues {
            warn!(%date, "activity: {}", issue);
        }

        Self {
            id: None,
            date,
            activity_type,
            duration_min,
            calories_burned,
            note,
            issues,
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    pub fn duration_min(&self) -> i64 {
        self.duration_min
    }

    pub fn calories_burned(&self) -> Option<f64> {
        self.calories_burned
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_storable(&self) -> bool {
        self.duration_min > 0
    }
}

impl HistoryRow for Activity {
    const COLUMNS: &'static [&'static str] = &["id", "Date", "Activity Type", "Duration (min)", "Calories Burned", "Note"];

    fn history_row(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.id),
            Cell::from(format_date(self.date)),
            Cell::from(self.activity_type.as_str()),
            Cell::from(self.duration_min),
            Cell::from(format_fixed(self.calories_burned.unwrap_or(0.0), 0)),
            Cell::from(self.note.clone()),
        ]
    }
}
