//! Storage for food intake.

use super::db::Db;
use crate::libs::filter::DateFilter;
use crate::libs::food::{FoodIntake, MacroSummary};
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Row};

const INSERT_FOOD: &str =
    "INSERT INTO food_intake (date, description, calories, protein_g, carbs_g, fat_g) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_FOODS: &str = "SELECT id, date, description, calories, protein_g, carbs_g, fat_g FROM food_intake";
const ORDER_RECENT_FIRST: &str = "ORDER BY date DESC, id DESC";
const SUM_CALORIES_ON: &str = "SELECT SUM(calories) FROM food_intake WHERE date = ?1";
const SELECT_CALORIES_BY_DAY: &str = "SELECT date, SUM(calories) FROM food_intake";
const GROUP_BY_DAY: &str = "GROUP BY date";
const SUM_MACROS_ON: &str = "SELECT SUM(protein_g), SUM(carbs_g), SUM(fat_g) FROM food_intake WHERE date = ?1";
const DELETE_FOOD: &str = "DELETE FROM food_intake WHERE id = ?1";

pub struct Foods<'a> {
    db: &'a Db,
}

impl<'a> Foods<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn insert(&self, food: &FoodIntake) -> Option<i64> {
        self.db.execute(
            INSERT_FOOD,
            params![
                food.date(),
                food.description(),
                food.calories(),
                food.protein_g(),
                food.carbs_g(),
                food.fat_g(),
            ],
        )
    }

    pub fn fetch(&self, filter: &DateFilter) -> Option<Vec<FoodIntake>> {
        let sql = filter.apply(SELECT_FOODS, ORDER_RECENT_FIRST);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), Self::from_row)
    }

    pub fn calories_on(&self, date: NaiveDate) -> Option<f64> {
        self.db.fetch_one(SUM_CALORIES_ON, params![date], |row| row.get::<_, Option<f64>>(0)).flatten()
    }

    /// Calorie intake per date; days without food are absent.
    pub fn calories_by_day(&self, filter: &DateFilter) -> Option<Vec<(NaiveDate, f64)>> {
        let sql = filter.apply(SELECT_CALORIES_BY_DAY, GROUP_BY_DAY);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), |row| Ok((row.get(0)?, row.get(1)?)))
    }

    /// Macro sums for `date`; a missing sum counts as 0.
    pub fn macros_on(&self, date: NaiveDate) -> Option<MacroSummary> {
        self.db.fetch_one(SUM_MACROS_ON, params![date], |row| {
            Ok(MacroSummary {
                protein: row.get::<_, Option<f64>>(0)?.unwrap_or(0.0),
                carbs: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
                fat: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
            })
        })
    }

    pub fn delete(&self, id: i64) -> Option<i64> {
        self.db.execute(DELETE_FOOD, params![id])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<FoodIntake> {
        let description: String = row.get(2)?;
        Ok(FoodIntake::new(row.get(1)?, &description, row.get(3)?, row.get(4)?, row.get(5)?, row.get(6)?).with_id(row.get(0)?))
    }
}
