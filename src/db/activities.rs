//! Storage for physical activities.

use super::db::Db;
use crate::libs::activity::Activity;
use crate::libs::filter::DateFilter;
use crate::libs::table::DataTable;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Row};

const INSERT_ACTIVITY: &str =
    "INSERT INTO activities (date, activity_type, duration_min, calories_burned, note) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ACTIVITIES: &str = "SELECT id, date, activity_type, duration_min, calories_burned, note FROM activities";
const ORDER_RECENT_FIRST: &str = "ORDER BY date DESC, id DESC";
const SUM_BURNED_ON: &str = "SELECT SUM(calories_burned) FROM activities WHERE date = ?1";
const SELECT_BURNED_BY_TYPE: &str = "SELECT activity_type AS \"Activity Type\", SUM(calories_burned) AS \"Total Calories Burned\" FROM activities WHERE calories_burned IS NOT NULL";
const SELECT_BURNED_BY_DAY: &str = "SELECT date, SUM(calories_burned) FROM activities WHERE calories_burned IS NOT NULL";
const GROUP_BY_TYPE: &str = "GROUP BY activity_type ORDER BY \"Total Calories Burned\" DESC";
const GROUP_BY_DAY: &str = "GROUP BY date";
const DELETE_ACTIVITY: &str = "DELETE FROM activities WHERE id = ?1";

pub struct Activities<'a> {
    db: &'a Db,
}

impl<'a> Activities<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn insert(&self, activity: &Activity) -> Option<i64> {
        self.db.execute(
            INSERT_ACTIVITY,
            params![
                activity.date(),
                activity.activity_type(),
                activity.duration_min(),
                activity.calories_burned(),
                activity.note(),
            ],
        )
    }

    pub fn fetch(&self, filter: &DateFilter) -> Option<Vec<Activity>> {
        let sql = filter.apply(SELECT_ACTIVITIES, ORDER_RECENT_FIRST);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), Self::from_row)
    }

    /// Sum of burned calories on `date`; `None` when nothing was recorded.
    pub fn burned_on(&self, date: NaiveDate) -> Option<f64> {
        self.db.fetch_one(SUM_BURNED_ON, params![date], |row| row.get::<_, Option<f64>>(0)).flatten()
    }

    /// Burned calories per activity type, largest total first.
    pub fn burned_by_type(&self, filter: &DateFilter) -> DataTable {
        let sql = filter.extend(SELECT_BURNED_BY_TYPE, GROUP_BY_TYPE);
        self.db.fetch_table(&sql, params_from_iter(filter.params()))
    }

    /// Burned calories per date; days without burned calories are absent.
    pub fn burned_by_day(&self, filter: &DateFilter) -> Option<Vec<(NaiveDate, f64)>> {
        let sql = filter.extend(SELECT_BURNED_BY_DAY, GROUP_BY_DAY);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), |row| Ok((row.get(0)?, row.get(1)?)))
    }

    pub fn delete(&self, id: i64) -> Option<i64> {
        self.db.execute(DELETE_ACTIVITY, params![id])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
        let activity_type: String = row.get(2)?;
        let note: Option<String> = row.get(5)?;
        Ok(Activity::new(row.get(1)?, &activity_type, row.get(3)?, row.get(4)?, note.as_deref()).with_id(row.get(0)?))
    }
}
