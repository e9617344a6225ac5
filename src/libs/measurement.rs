//! Body measurement entries and BMI.

use crate::libs::entry::HistoryRow;
use crate::libs::error::ValidationIssue;
use crate::libs::formatter::{format_date, format_fixed};
use crate::libs::table::Cell;
use chrono::NaiveDate;
use std::fmt;
use tracing::warn;

/// A weight/height reading for one day.
///
/// Non-positive or non-finite weight or height is coerced to 0 and recorded
/// as an issue; such a measurement cannot be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    id: Option<i64>,
    date: NaiveDate,
    weight_kg: f64,
    height_cm: f64,
    issues: Vec<ValidationIssue>,
}

impl Measurement {
    pub fn new(date: NaiveDate, weight_kg: f64, height_cm: f64) -> Self {
        let mut issues = Vec::new();

        let weight_kg = if !weight_kg.is_finite() {
            issues.push(ValidationIssue::NonFinite("Weight"));
            0.0
        } else if weight_kg > 0.0 {
            weight_kg
        } else {
            issues.push(ValidationIssue::NonPositiveWeight(weight_kg));
            0.0
        };
        let height_cm = if !height_cm.is_finite() {
            issues.push(ValidationIssue::NonFinite("Height"));
            0.0
        } else if height_cm > 0.0 {
            height_cm
        } else {
            issues.push(ValidationIssue::NonPositiveHeight(height_cm));
            0.0
        };

        for issue in &issues {
            warn!(%date, "measurement: {}", issue);
        }

        Self {
            id: None,
            date,
            weight_kg,
            height_cm,
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

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_storable(&self) -> bool {
        self.weight_kg > 0.0 && self.height_cm > 0.0
    }

    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_cm)
    }
}

/// Body mass index: weight (kg) over height (m) squared.
///
/// Returns 0 when either input is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg > 0.0 && height_cm > 0.0 {
        let height_m = height_cm / 100.0;
        weight_kg / (height_m * height_m)
    } else {
        0.0
    }
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// `None` for a zero BMI (missing measurement data).
    pub fn from_bmi(bmi: f64) -> Option<Self> {
        if !(bmi > 0.0) {
            return None;
        }
        Some(match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            _ => BmiCategory::Obese,
        })
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

impl HistoryRow for Measurement {
    const COLUMNS: &'static [&'static str] = &["id", "Date", "Weight (kg)", "Height (cm)", "BMI"];

    fn history_row(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.id),
            Cell::from(format_date(self.date)),
            Cell::from(format_fixed(self.weight_kg, 1)),
            Cell::from(format_fixed(self.height_cm, 0)),
            Cell::from(format_fixed(self.bmi(), 2)),
        ]
    }
}
