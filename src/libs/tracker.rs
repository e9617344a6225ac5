//! The tracker: the single entry point used by the presentation layer.
//!
//! `Tracker` validates entries, writes them through the storage layer, and
//! reshapes query results into presentation tables. It never returns errors:
//! writes report `bool`, reads return an empty [`DataTable`] when there is
//! nothing to show or the query failed. Storage problems are logged by the
//! gateway.
//!
//! Derived metrics (calorie totals, BMI, trends) are in
//! [`metrics`](crate::libs::metrics).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use welltrack::db::db::Db;
//! use welltrack::libs::{measurement::Measurement, tracker::Tracker};
//! use chrono::NaiveDate;
//!
//! let tracker = Tracker::new(Db::open("welltrack.db"));
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//!
//! let mut measurement = Measurement::new(date, 70.0, 175.0);
//! if tracker.add_measurement(&mut measurement) {
//!     println!("saved as {}", measurement.id().unwrap());
//! }
//! let today = tracker.measurement_history(Some(date));
//! ```

use crate::db::activities::Activities;
use crate::db::db::Db;
use crate::db::foods::Foods;
use crate::db::measurements::Measurements;
use crate::db::notes::Notes;
use crate::db::schema::ensure_schema;
use crate::db::water::Water;
use crate::libs::activity::Activity;
use crate::libs::config::Config;
use crate::libs::entry::{Entry, EntryKind, HistoryRow};
use crate::libs::error::ValidationIssue;
use crate::libs::filter::DateFilter;
use crate::libs::food::FoodIntake;
use crate::libs::measurement::Measurement;
use crate::libs::messages::Message;
use crate::libs::note::DailyNote;
use crate::libs::table::DataTable;
use crate::libs::water::WaterIntake;
use crate::msg_error;
use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, warn};

pub struct Tracker {
    db: Db,
    schema_ready: bool,
}

impl Tracker {
    /// Creates a tracker and makes sure the schema exists.
    ///
    /// A failed schema setup is reported once here; the tracker is still
    /// returned and its operations keep failing softly.
    pub fn new(db: Db) -> Self {
        let schema_ready = ensure_schema(&db);
        if !schema_ready {
            msg_error!(Message::SchemaInitFailed(db.path().display().to_string()));
        }
        Self { db, schema_ready }
    }

    /// Tracker over the database named by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.db()?))
    }

    pub fn schema_ready(&self) -> bool {
        self.schema_ready
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    // === ADD ===

    /// Stores any entry and back-fills its id.
    pub fn add(&self, entry: &mut Entry) -> bool {
        match entry {
            Entry::Measurement(e) => self.add_measurement(e),
            Entry::Activity(e) => self.add_activity(e),
            Entry::Food(e) => self.add_food(e),
            Entry::Water(e) => self.add_water(e),
            Entry::Note(e) => self.add_note(e),
        }
    }

    pub fn add_measurement(&self, measurement: &mut Measurement) -> bool {
        if !accept(EntryKind::Measurement, measurement.is_storable(), measurement.issues()) {
            return false;
        }
        store(EntryKind::Measurement, Measurements::new(&self.db).insert(measurement), |id| {
            measurement.assign_id(id)
        })
    }

    pub fn add_activity(&self, activity: &mut Activity) -> bool {
        if !accept(EntryKind::Activity, activity.is_storable(), activity.issues()) {
            return false;
        }
        store(EntryKind::Activity, Activities::new(&self.db).insert(activity), |id| activity.assign_id(id))
    }

    pub fn add_food(&self, food: &mut FoodIntake) -> bool {
        if !accept(EntryKind::Food, food.is_storable(), food.issues()) {
            return false;
        }
        store(EntryKind::Food, Foods::new(&self.db).insert(food), |id| food.assign_id(id))
    }

    pub fn add_water(&self, water: &mut WaterIntake) -> bool {
        if !accept(EntryKind::Water, water.is_storable(), water.issues()) {
            return false;
        }
        store(EntryKind::Water, Water::new(&self.db).insert(water), |id| water.assign_id(id))
    }

    pub fn add_note(&self, note: &mut DailyNote) -> bool {
        if !accept(EntryKind::Note, note.is_storable(), note.issues()) {
            return false;
        }
        store(EntryKind::Note, Notes::new(&self.db).insert(note), |id| note.assign_id(id))
    }

    // === HISTORY ===

    /// History of one kind, optionally limited to a single date.
    pub fn history(&self, kind: EntryKind, date: Option<NaiveDate>) -> DataTable {
        self.history_in(kind, &DateFilter::on(date))
    }

    /// History of one kind for any date filter, most recent first.
    pub fn history_in(&self, kind: EntryKind, filter: &DateFilter) -> DataTable {
        match kind {
            EntryKind::Measurement => to_table(Measurements::new(&self.db).fetch(filter)),
            EntryKind::Activity => to_table(Activities::new(&self.db).fetch(filter)),
            EntryKind::Food => to_table(Foods::new(&self.db).fetch(filter)),
            EntryKind::Water => to_table(Water::new(&self.db).fetch(filter)),
            EntryKind::Note => to_table(Notes::new(&self.db).fetch(filter)),
        }
    }

    /// Columns: id, Date, Weight (kg), Height (cm), BMI.
    pub fn measurement_history(&self, date: Option<NaiveDate>) -> DataTable {
        self.history(EntryKind::Measurement, date)
    }

    /// Columns: id, Date, Activity Type, Duration (min), Calories Burned, Note.
    pub fn activity_history(&self, date: Option<NaiveDate>) -> DataTable {
        self.history(EntryKind::Activity, date)
    }

    /// Columns: id, Date, Description, Calories, Protein (g), Carbs (g), Fat (g).
    pub fn food_history(&self, date: Option<NaiveDate>) -> DataTable {
        self.history(EntryKind::Food, date)
    }

    /// Columns: id, Date, Amount (ml).
    pub fn water_history(&self, date: Option<NaiveDate>) -> DataTable {
        self.history(EntryKind::Water, date)
    }

    /// Columns: id, Date, Mood (1-5), Energy (1-5), Note.
    pub fn note_history(&self, date: Option<NaiveDate>) -> DataTable {
        self.history(EntryKind::Note, date)
    }

    // === DELETE ===

    /// Deletes one entry by id.
    ///
    /// Only the statement's execution is checked, so an id that does not
    /// exist still reports success.
    pub fn delete(&self, kind: EntryKind, id: i64) -> bool {
        let result = match kind {
            EntryKind::Measurement => Measurements::new(&self.db).delete(id),
            EntryKind::Activity => Activities::new(&self.db).delete(id),
            EntryKind::Food => Foods::new(&self.db).delete(id),
            EntryKind::Water => Water::new(&self.db).delete(id),
            EntryKind::Note => Notes::new(&self.db).delete(id),
        };
        debug!(kind = kind.table(), id, deleted = result.is_some(), "delete");
        result.is_some()
    }

    pub fn delete_measurement(&self, id: i64) -> bool {
        self.delete(EntryKind::Measurement, id)
    }

    pub fn delete_activity(&self, id: i64) -> bool {
        self.delete(EntryKind::Activity, id)
    }

    pub fn delete_food(&self, id: i64) -> bool {
        self.delete(EntryKind::Food, id)
    }

    pub fn delete_water(&self, id: i64) -> bool {
        self.delete(EntryKind::Water, id)
    }

    pub fn delete_note(&self, id: i64) -> bool {
        self.delete(EntryKind::Note, id)
    }
}

fn accept(kind: EntryKind, storable: bool, issues: &[ValidationIssue]) -> bool {
    if !storable {
        let reasons: Vec<String> = issues.iter().map(ToString::to_string).collect();
        warn!(kind = kind.table(), reasons = %reasons.join("; "), "entry rejected");
    }
    storable
}

fn store(kind: EntryKind, inserted: Option<i64>, assign: impl FnOnce(i64)) -> bool {
    match inserted {
        Some(id) => {
            debug!(kind = kind.table(), id, "entry stored");
            assign(id);
            true
        }
        None => false,
    }
}

fn to_table<T: HistoryRow>(rows: Option<Vec<T>>) -> DataTable {
    let mut table = DataTable::new(T::COLUMNS.iter().copied());
    for row in rows.unwrap_or_default() {
        table.push_row(row.history_row());
    }
    table
}
