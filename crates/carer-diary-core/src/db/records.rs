//! Generic owner-scoped record operations.
//!
//! Every user-owned record kind implements [`OwnedRecord`] and gets the same
//! insert / get / list / delete operations. Reads and deletes always filter
//! on `owner_id` as well as the record ID, so one user can never see or
//! remove another user's rows.

use rusqlite::{params_from_iter, ErrorCode, OptionalExtension, Row, ToSql};

use super::{Database, DbError, DbResult};

/// A record kind stored in its own table and owned by one user.
pub trait OwnedRecord: Sized {
    /// Table holding this record kind.
    const TABLE: &'static str;
    /// Primary key column.
    const ID_COLUMN: &'static str;
    /// Stored columns, in the order used by [`OwnedRecord::from_row`] and
    /// [`OwnedRecord::values`].
    const COLUMNS: &'static [&'static str];
    /// `ORDER BY` clause for owner listings.
    const ORDER_BY: &'static str;

    /// Primary key value.
    fn record_id(&self) -> &str;

    /// Owning user ID.
    fn owner_id(&self) -> &str;

    /// Build a record from a row selected with [`OwnedRecord::COLUMNS`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Column values in [`OwnedRecord::COLUMNS`] order.
    fn values(&self) -> Vec<&dyn ToSql>;
}

pub(crate) fn select_columns<R: OwnedRecord>() -> String {
    R::COLUMNS.join(", ")
}

impl Database {
    /// Insert a new owned record.
    pub fn insert_record<R: OwnedRecord>(&self, record: &R) -> DbResult<()> {
        let placeholders = (1..=R::COLUMNS.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            select_columns::<R>(),
            placeholders
        );
        match self.conn.execute(&sql, params_from_iter(record.values())) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, msg)) if e.code == ErrorCode::ConstraintViolation => {
                Err(DbError::Constraint(format!(
                    "{}: {}",
                    R::TABLE,
                    msg.unwrap_or_else(|| e.to_string())
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get one record by ID, only if it belongs to `owner_id`.
    pub fn get_record<R: OwnedRecord>(&self, owner_id: &str, record_id: &str) -> DbResult<Option<R>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1 AND owner_id = ?2",
            select_columns::<R>(),
            R::TABLE,
            R::ID_COLUMN
        );
        self.conn
            .query_row(&sql, [record_id, owner_id], |row| R::from_row(row))
            .optional()
            .map_err(Into::into)
    }

    /// List every record of this kind belonging to `owner_id`.
    pub fn list_records<R: OwnedRecord>(&self, owner_id: &str) -> DbResult<Vec<R>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE owner_id = ? ORDER BY {}",
            select_columns::<R>(),
            R::TABLE,
            R::ORDER_BY
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([owner_id], |row| R::from_row(row))?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete one record by ID, only if it belongs to `owner_id`.
    pub fn delete_record<R: OwnedRecord>(&self, owner_id: &str, record_id: &str) -> DbResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1 AND owner_id = ?2",
            R::TABLE,
            R::ID_COLUMN
        );
        let rows_affected = self.conn.execute(&sql, [record_id, owner_id])?;
        Ok(rows_affected > 0)
    }
}
