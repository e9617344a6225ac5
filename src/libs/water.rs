//! Water intake entries.

use crate::libs::entry::HistoryRow;
use crate::libs::error::ValidationIssue;
use crate::libs::formatter::format_date;
use crate::libs::table::Cell;
use chrono::NaiveDate;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct WaterIntake {
    id: Option<i64>,
    date: NaiveDate,
    amount_ml: i64,
    issues: Vec<ValidationIssue>,
}

impl WaterIntake {
    /// A non-positive amount is coerced to 0 and cannot be stored.
    pub fn new(date: NaiveDate, amount_ml: i64) -> Self {
        let mut issues = Vec::new();
        let amount_ml = if amount_ml > 0 {
            amount_ml
        } else {
            issues.push(ValidationIssue::NonPositiveWater(amount_ml));
            0
        };

        for issue in &issues {
            warn!(%date, "water intake: {}", issue);
        }

        Self {
            id: None,
            date,
            amount_ml,
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

    pub fn amount_ml(&self) -> i64 {
        self.amount_ml
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_storable(&self) -> bool {
        self.amount_ml > 0
    }
}

impl HistoryRow for WaterIntake {
    const COLUMNS: &'static [&'static str] = &["id", "Date", "Amount (ml)"];

    fn history_row(&self) -> Vec<Cell> {
        vec![Cell::from(self.id), Cell::from(format_date(self.date)), Cell::from(self.amount_ml)]
    }
}
