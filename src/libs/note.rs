//! Daily mood and energy notes.

use crate::libs::config::SCALE_RANGE;
use crate::libs::entry::HistoryRow;
use crate::libs::error::ValidationIssue;
use crate::libs::formatter::{format_date, format_scale};
use crate::libs::table::Cell;
use chrono::NaiveDate;
use tracing::warn;

/// Mood/energy ratings (1-5) and free text for one day.
///
/// Ratings outside 1-5 are dropped, not clamped. A note is always storable.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyNote {
    id: Option<i64>,
    date: NaiveDate,
    mood_scale: Option<u8>,
    energy_scale: Option<u8>,
    note_text: Option<String>,
    issues: Vec<ValidationIssue>,
}

impl DailyNote {
    pub fn new(date: NaiveDate, mood_scale: Option<i64>, energy_scale: Option<i64>, note_text: Option<&str>) -> Self {
        let mut issues = Vec::new();

        let mut scale = |name: &'static str, value: Option<i64>| -> Option<u8> {
            let value = value?;
            match u8::try_from(value) {
                Ok(v) if SCALE_RANGE.contains(&v) => Some(v),
                _ => {
                    issues.push(ValidationIssue::ScaleOutOfRange { scale: name, value });
                    None
                }
            }
        };
        let mood_scale = scale("Mood", mood_scale);
        let energy_scale = scale("Energy", energy_scale);

        let note_text = note_text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string);

        for issue in &issues {
            warn!(%date, "daily note: {}", issue);
        }

        Self {
            id: None,
            date,
            mood_scale,
            energy_scale,
            note_text,
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

    pub fn mood_scale(&self) -> Option<u8> {
        self.mood_scale
    }

    pub fn energy_scale(&self) -> Option<u8> {
        self.energy_scale
    }

    pub fn note_text(&self) -> Option<&str> {
        self.note_text.as_deref()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_storable(&self) -> bool {
        true
    }
}

impl HistoryRow for DailyNote {
    const COLUMNS: &'static [&'static str] = &["id", "Date", "Mood (1-5)", "Energy (1-5)", "Note"];

    fn history_row(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.id),
            Cell::from(format_date(self.date)),
            Cell::from(format_scale(self.mood_scale)),
            Cell::from(format_scale(self.energy_scale)),
            Cell::from(self.note_text.clone()),
        ]
    }
}
