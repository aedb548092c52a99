//! Medication reminder database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Reminder;

impl Database {
    /// Create or fully replace the reminder for `reminder.owner_id`.
    ///
    /// One conditional write keyed by owner; concurrent writers for the same
    /// owner resolve as last-write-wins.
    pub fn upsert_reminder(&self, reminder: &Reminder) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO reminders (
                owner_id, initial_date, frequency_weeks, next_collection_date, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(owner_id) DO UPDATE SET
                initial_date = excluded.initial_date,
                frequency_weeks = excluded.frequency_weeks,
                next_collection_date = excluded.next_collection_date,
                updated_at = excluded.updated_at
            "#,
            params![
                reminder.owner_id,
                reminder.initial_date,
                reminder.frequency_weeks,
                reminder.next_collection_date,
                reminder.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Get the reminder for an owner.
    pub fn get_reminder(&self, owner_id: &str) -> DbResult<Option<Reminder>> {
        self.conn
            .query_row(
                r#"
                SELECT owner_id, initial_date, frequency_weeks, next_collection_date, updated_at
                FROM reminders
                WHERE owner_id = ?
                "#,
                [owner_id],
                |row| {
                    Ok(Reminder {
                        owner_id: row.get(0)?,
                        initial_date: row.get(1)?,
                        frequency_weeks: row.get(2)?,
                        next_collection_date: row.get(3)?,
                        updated_at: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Delete the reminder for an owner.
    pub fn delete_reminder(&self, owner_id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM reminders WHERE owner_id = ?", [owner_id])?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::NaiveDate;

    fn setup_db() -> (Database, String) {
        let db = Database::open_in_memory().unwrap();
        let user = User::new("Ann".into(), "ann@example.com".into(), "h".into(), "1 Road".into());
        db.insert_user(&user).unwrap();
        (db, user.user_id)
    }

    fn reminder(owner: &str, initial: NaiveDate, weeks: u32) -> Reminder {
        Reminder {
            owner_id: owner.into(),
            initial_date: initial,
            frequency_weeks: weeks,
            next_collection_date: initial + chrono::Days::new(u64::from(weeks) * 7),
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let (db, owner) = setup_db();
        let first = reminder(&owner, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4);
        let second = reminder(&owner, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 2);

        db.upsert_reminder(&first).unwrap();
        db.upsert_reminder(&second).unwrap();

        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM reminders", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.get_reminder(&owner).unwrap().unwrap(), second);
    }

    #[test]
    fn test_delete_reminder() {
        let (db, owner) = setup_db();
        assert!(!db.delete_reminder(&owner).unwrap());

        db.upsert_reminder(&reminder(&owner, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1))
            .unwrap();
        assert!(db.delete_reminder(&owner).unwrap());
        assert!(db.get_reminder(&owner).unwrap().is_none());
    }
}
