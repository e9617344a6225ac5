//! Date filter shapes used by history and aggregate queries.
//!
//! Each shape maps to one fixed SQL condition with positional placeholders;
//! dates only ever travel as bound parameters.

use crate::libs::formatter::INPUT_DATE_FORMAT;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// No restriction.
    #[default]
    Any,
    /// Exactly this date.
    On(NaiveDate),
    /// On or after this date.
    From(NaiveDate),
    /// On or before this date.
    Until(NaiveDate),
    /// Between both dates, inclusive.
    Between(NaiveDate, NaiveDate),
}

impl DateFilter {
    /// Exact-date filter, or no filter for `None`.
    pub fn on(date: Option<NaiveDate>) -> Self {
        date.map_or(DateFilter::Any, DateFilter::On)
    }

    /// Inclusive range where either bound may be open.
    pub fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => DateFilter::Between(start, end),
            (Some(start), None) => DateFilter::From(start),
            (None, Some(end)) => DateFilter::Until(end),
            (None, None) => DateFilter::Any,
        }
    }

    /// SQL condition on the `date` column, `None` for [`DateFilter::Any`].
    pub fn condition(&self) -> Option<&'static str> {
        match self {
            DateFilter::Any => None,
            DateFilter::On(_) => Some("date = ?1"),
            DateFilter::From(_) => Some("date >= ?1"),
            DateFilter::Until(_) => Some("date <= ?1"),
            DateFilter::Between(_, _) => Some("date BETWEEN ?1 AND ?2"),
        }
    }

    /// Parameters matching the placeholders of [`DateFilter::condition`].
    pub fn params(&self) -> Vec<String> {
        let fmt = |d: &NaiveDate| d.format(INPUT_DATE_FORMAT).to_string();
        match self {
            DateFilter::Any => vec![],
            DateFilter::On(d) | DateFilter::From(d) | DateFilter::Until(d) => vec![fmt(d)],
            DateFilter::Between(start, end) => vec![fmt(start), fmt(end)],
        }
    }

    /// Assembles `base [WHERE condition] tail` for a base without a WHERE
    /// clause of its own.
    pub fn apply(&self, base: &str, tail: &str) -> String {
        self.assemble(base, " WHERE ", tail)
    }

    /// Assembles `base [AND condition] tail` for a base that already filters.
    pub fn extend(&self, base: &str, tail: &str) -> String {
        self.assemble(base, " AND ", tail)
    }

    fn assemble(&self, base: &str, joiner: &str, tail: &str) -> String {
        let mut sql = base.to_string();
        if let Some(condition) = self.condition() {
            sql.push_str(joiner);
            sql.push_str(condition);
        }
        if !tail.is_empty() {
            sql.push(' ');
            sql.push_str(tail);
        }
        sql
    }
}
