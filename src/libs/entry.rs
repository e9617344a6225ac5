//! The closed set of tracked entry kinds.
//!
//! [`EntryKind`] names a table; [`Entry`] carries one constructed entity of
//! any kind. Both are matched exhaustively by the tracker, so adding a kind
//! forces every query path to handle it.

use crate::libs::activity::Activity;
use crate::libs::error::ValidationIssue;
use crate::libs::food::FoodIntake;
use crate::libs::measurement::Measurement;
use crate::libs::note::DailyNote;
use crate::libs::table::Cell;
use crate::libs::water::WaterIntake;
use chrono::NaiveDate;
use std::fmt;

/// Entities that can be shown as a row of a history table.
pub trait HistoryRow {
    const COLUMNS: &'static [&'static str];

    fn history_row(&self) -> Vec<Cell>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EntryKind {
    #[value(alias = "measurements")]
    Measurement,
    #[value(alias = "activities")]
    Activity,
    #[value(alias = "food_intake")]
    Food,
    #[value(alias = "water_intake")]
    Water,
    #[value(aliases = ["notes", "daily_notes"])]
    Note,
}

impl EntryKind {
    pub const ALL: [EntryKind; 5] = [EntryKind::Measurement, EntryKind::Activity, EntryKind::Food, EntryKind::Water, EntryKind::Note];

    /// Database table holding this kind.
    pub fn table(self) -> &'static str {
        match self {
            EntryKind::Measurement => "measurements",
            EntryKind::Activity => "activities",
            EntryKind::Food => "food_intake",
            EntryKind::Water => "water_intake",
            EntryKind::Note => "daily_notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Measurement => "Body measurement",
            EntryKind::Activity => "Physical activity",
            EntryKind::Food => "Food intake",
            EntryKind::Water => "Water intake",
            EntryKind::Note => "Daily note",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entity of any tracked kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Measurement(Measurement),
    Activity(Activity),
    Food(FoodIntake),
    Water(WaterIntake),
    Note(DailyNote),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Measurement(_) => EntryKind::Measurement,
            Entry::Activity(_) => EntryKind::Activity,
            Entry::Food(_) => EntryKind::Food,
            Entry::Water(_) => EntryKind::Water,
            Entry::Note(_) => EntryKind::Note,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            Entry::Measurement(e) => e.id(),
            Entry::Activity(e) => e.id(),
            Entry::Food(e) => e.id(),
            Entry::Water(e) => e.id(),
            Entry::Note(e) => e.id(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Measurement(e) => e.date(),
            Entry::Activity(e) => e.date(),
            Entry::Food(e) => e.date(),
            Entry::Water(e) => e.date(),
            Entry::Note(e) => e.date(),
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Entry::Measurement(e) => e.issues(),
            Entry::Activity(e) => e.issues(),
            Entry::Food(e) => e.issues(),
            Entry::Water(e) => e.issues(),
            Entry::Note(e) => e.issues(),
        }
    }

    pub fn is_storable(&self) -> bool {
        match self {
            Entry::Measurement(e) => e.is_storable(),
            Entry::Activity(e) => e.is_storable(),
            Entry::Food(e) => e.is_storable(),
            Entry::Water(e) => e.is_storable(),
            Entry::Note(e) => e.is_storable(),
        }
    }
}

impl From<Measurement> for Entry {
    fn from(e: Measurement) -> Self {
        Entry::Measurement(e)
    }
}

impl From<Activity> for Entry {
    fn from(e: Activity) -> Self {
        Entry::Activity(e)
    }
}

impl From<FoodIntake> for Entry {
    fn from(e: FoodIntake) -> Self {
        Entry::Food(e)
    }
}

impl From<WaterIntake> for Entry {
    fn from(e: WaterIntake) -> Self {
        Entry::Water(e)
    }
}

impl From<DailyNote> for Entry {
    fn from(e: DailyNote) -> Self {
        Entry::Note(e)
    }
}
