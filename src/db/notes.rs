//! Storage for daily notes.

use super::db::Db;
use crate::libs::filter::DateFilter;
use crate::libs::note::DailyNote;
use rusqlite::{params, params_from_iter, Row};

const INSERT_NOTE: &str = "INSERT INTO daily_notes (date, mood_scale, energy_scale, note_text) VALUES (?1, ?2, ?3, ?4)";
const SELECT_NOTES: &str = "SELECT id, date, mood_scale, energy_scale, note_text FROM daily_notes";
const ORDER_RECENT_FIRST: &str = "ORDER BY date DESC, id DESC";
const DELETE_NOTE: &str = "DELETE FROM daily_notes WHERE id = ?1";

pub struct Notes<'a> {
    db: &'a Db,
}

impl<'a> Notes<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn insert(&self, note: &DailyNote) -> Option<i64> {
        self.db.execute(
            INSERT_NOTE,
            params![note.date(), note.mood_scale(), note.energy_scale(), note.note_text()],
        )
    }

    pub fn fetch(&self, filter: &DateFilter) -> Option<Vec<DailyNote>> {
        let sql = filter.apply(SELECT_NOTES, ORDER_RECENT_FIRST);
        self.db.fetch_all(&sql, params_from_iter(filter.params()), Self::from_row)
    }

    pub fn delete(&self, id: i64) -> Option<i64> {
        self.db.execute(DELETE_NOTE, params![id])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<DailyNote> {
        let text: Option<String> = row.get(4)?;
        Ok(DailyNote::new(row.get(1)?, row.get(2)?, row.get(3)?, text.as_deref()).with_id(row.get(0)?))
    }
}
