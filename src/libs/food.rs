//! Food intake entries and macro-nutrient totals.

use crate::libs::entry::HistoryRow;
use crate::libs::error::ValidationIssue;
use crate::libs::formatter::{format_date, format_fixed};
use crate::libs::table::Cell;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct FoodIntake {
    id: Option<i64>,
    date: NaiveDate,
    description: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    issues: Vec<ValidationIssue>,
}

impl FoodIntake {
    /// Builds a sanitized food entry.
    ///
    /// Negative calories become 0; missing, negative or non-finite macros
    /// become 0. An empty description or non-finite calories make the entry
    /// unstorable.
    pub fn new(
        date: NaiveDate,
        description: &str,
        calories: f64,
        protein_g: Option<f64>,
        carbs_g: Option<f64>,
        fat_g: Option<f64>,
    ) -> Self {
        let mut issues = Vec::new();

        let description = description.trim().to_string();
        if description.is_empty() {
            issues.push(ValidationIssue::EmptyDescription);
        }

        let calories = if !calories.is_finite() {
            issues.push(ValidationIssue::NonFinite("Calories"));
            0.0
        } else if calories >= 0.0 {
            calories
        } else {
            issues.push(ValidationIssue::NegativeCalories(calories));
            0.0
        };

        let mut grams = |macro_name: &'static str, value: Option<f64>| match value {
            Some(v) if !v.is_finite() => {
                issues.push(ValidationIssue::NonFinite(macro_name));
                0.0
            }
            Some(v) if v >= 0.0 => v,
            Some(v) => {
                issues.push(ValidationIssue::NegativeMacro { macro_name, value: v });
                0.0
            }
            None => 0.0,
        };
        let protein_g = grams("Protein", protein_g);
        let carbs_g = grams("Carbs", carbs_g);
        let fat_g = grams("Fat", fat_g);

        for issue in &issues {
            warn!(%date, "food intake: {}", issue);
        }

        Self {
            id: None,
            date,
            description,
            calories,
            protein_g,
            carbs_g,
            fat_g,
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

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn protein_g(&self) -> f64 {
        self.protein_g
    }

    pub fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    pub fn fat_g(&self) -> f64 {
        self.fat_g
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_storable(&self) -> bool {
        !self.description.is_empty() && !self.issues.contains(&ValidationIssue::NonFinite("Calories"))
    }
}

impl HistoryRow for FoodIntake {
    const COLUMNS: &'static [&'static str] = &["id", "Date", "Description", "Calories", "Protein (g)", "Carbs (g)", "Fat (g)"];

    fn history_row(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.id),
            Cell::from(format_date(self.date)),
            Cell::from(self.description.as_str()),
            Cell::from(format_fixed(self.calories, 0)),
            Cell::from(format_fixed(self.protein_g, 1)),
            Cell::from(format_fixed(self.carbs_g, 1)),
            Cell::from(format_fixed(self.fat_g, 1)),
        ]
    }
}

/// Grams of each macro-nutrient eaten on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroSummary {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
