//! Diary entry database operations.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Row, ToSql};

use super::records::select_columns;
use super::{Database, DbResult, OwnedRecord};
use crate::models::{DiaryCategory, DiaryEntry};

impl ToSql for DiaryCategory {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for DiaryCategory {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let tag = value.as_str()?;
        DiaryCategory::from_tag(tag)
            .ok_or_else(|| FromSqlError::Other(format!("Unknown diary category: {}", tag).into()))
    }
}

impl OwnedRecord for DiaryEntry {
    const TABLE: &'static str = "diary_entries";
    const ID_COLUMN: &'static str = "entry_id";
    const COLUMNS: &'static [&'static str] = &[
        "entry_id",
        "owner_id",
        "category",
        "date",
        "time",
        "description",
        "created_at",
    ];
    const ORDER_BY: &'static str = "date, time, created_at";

    fn record_id(&self) -> &str {
        &self.entry_id
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(DiaryEntry {
            entry_id: row.get(0)?,
            owner_id: row.get(1)?,
            category: row.get(2)?,
            date: row.get(3)?,
            time: row.get(4)?,
            description: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        params![
            self.entry_id,
            self.owner_id,
            self.category,
            self.date,
            self.time,
            self.description,
            self.created_at,
        ]
        .to_vec()
    }
}

impl Database {
    /// List an owner's diary entries of one category, oldest first.
    pub fn list_diary_entries(&self, owner_id: &str, category: DiaryCategory) -> DbResult<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT {} FROM diary_entries WHERE owner_id = ?1 AND category = ?2 ORDER BY {}",
            select_columns::<DiaryEntry>(),
            DiaryEntry::ORDER_BY
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![owner_id, category], DiaryEntry::from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List an owner's diary entries of one category dated `start..=end`,
    /// oldest first.
    pub fn list_diary_entries_between(
        &self,
        owner_id: &str,
        category: DiaryCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT {} FROM diary_entries WHERE owner_id = ?1 AND category = ?2 AND date BETWEEN ?3 AND ?4 ORDER BY {}",
            select_columns::<DiaryEntry>(),
            DiaryEntry::ORDER_BY
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![owner_id, category, start, end], DiaryEntry::from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
