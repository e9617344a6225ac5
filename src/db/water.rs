//! Storage for water intake.

use super::db::Db;
use crate::libs::filter::DateFilter;
use crate::libs::water::WaterIntake;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Row};

const INSERT_WATER: &str = "INSERT INTO water_intake (date, amount_ml) VALUES (?1, ?2)";
const SELECT_WATER: &str = "SELECT id, date, amount_ml FROM water_intake";
const ORDER_RECENT_FIRST: &str = "ORDER BY date DESC, id DESC";
const SUM_AMOUNT_ON: &str = "SELECT SUM(amount_ml) FROM water_intake WHERE date = ?1";
const DELETE_WATER: &str = "DELETE FROM water_intake WHERE id = ?1";

pub struct Water<'a> {
    db: &'a Db,
}

impl<'a> Water<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn insert(&self, water: &WaterIntake) -> Option<i64> {
        self.db.execute(INSERT_WATER, params![water.date(), water.amount_ml()])
    }

    pub fn fetch(&self, filter: &DateFilter) -> Option<Vec<WaterIntake>> {
        let sql = filter.apply(SELECT_WATER, ORDER_RECENT_FIRST);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), Self::from_row)
    }

    pub fn total_on(&self, date: NaiveDate) -> Option<f64> {
        self.db.fetch_one(SUM_AMOUNT_ON, params![date], |row| row.get::<_, Option<f64>>(0)).flatten()
    }

    pub fn delete(&self, id: i64) -> Option<i64> {
        self.db.execute(DELETE_WATER, params![id])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<WaterIntake> {
        Ok(WaterIntake::new(row.get(1)?, row.get(2)?).with_id(row.get(0)?))
    }
}
