//! Storage for body measurements.

use super::db::Db;
use crate::libs::filter::DateFilter;
use crate::libs::measurement::Measurement;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Row};

const INSERT_MEASUREMENT: &str = "INSERT INTO measurements (date, weight_kg, height_cm) VALUES (?1, ?2, ?3)";
const SELECT_MEASUREMENTS: &str = "SELECT id, date, weight_kg, height_cm FROM measurements";
const ORDER_RECENT_FIRST: &str = "ORDER BY date DESC, id DESC";
const SELECT_LATEST: &str = "SELECT id, date, weight_kg, height_cm FROM measurements ORDER BY date DESC, id DESC LIMIT 1";
const SELECT_CHRONOLOGICAL: &str = "SELECT id, date, weight_kg, height_cm FROM measurements ORDER BY date ASC, id ASC";
const SELECT_WEIGHTS: &str = "SELECT date, weight_kg FROM measurements ORDER BY date ASC, id ASC";
const DELETE_MEASUREMENT: &str = "DELETE FROM measurements WHERE id = ?1";

pub struct Measurements<'a> {
    db: &'a Db,
}

impl<'a> Measurements<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Returns the new row id.
    pub fn insert(&self, measurement: &Measurement) -> Option<i64> {
        self.db.execute(
            INSERT_MEASUREMENT,
            params![measurement.date(), measurement.weight_kg(), measurement.height_cm()],
        )
    }

    /// Most recent first; ties on date keep reverse insertion order.
    pub fn fetch(&self, filter: &DateFilter) -> Option<Vec<Measurement>> {
        let sql = filter.apply(SELECT_MEASUREMENTS, ORDER_RECENT_FIRST);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), Self::from_row)
    }

    pub fn latest(&self) -> Option<Measurement> {
        self.db.fetch_one(SELECT_LATEST, [], Self::from_row)
    }

    /// Every measurement, oldest first.
    pub fn chronological(&self) -> Option<Vec<Measurement>> {
        self.db.fetch_all(SELECT_CHRONOLOGICAL, [], Self::from_row)
    }

    /// All (date, weight) pairs, oldest first.
    pub fn weights(&self) -> Option<Vec<(NaiveDate, f64)>> {
        self.db.fetch_all(SELECT_WEIGHTS, [], |row| Ok((row.get(0)?, row.get(1)?)))
    }

    pub fn delete(&self, id: i64) -> Option<i64> {
        self.db.execute(DELETE_MEASUREMENT, params![id])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Measurement> {
        Ok(Measurement::new(row.get(1)?, row.get(2)?, row.get(3)?).with_id(row.get(0)?))
    }
}
