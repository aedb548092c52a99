//! User account database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{User, UserDetailsUpdate};

const USER_COLUMNS: &str =
    "user_id, username, email, password_hash, address, phone, created_at, updated_at";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        address: row.get(4)?,
        phone: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

impl Database {
    /// Insert a new user.
    pub fn insert_user(&self, user: &User) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO users (
                user_id, username, email, password_hash, address, phone,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                user.user_id,
                user.username,
                user.email,
                user.password_hash,
                user.address,
                user.phone,
                user.created_at,
                user.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Get a user by ID.
    pub fn get_user(&self, user_id: &str) -> DbResult<Option<User>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM users WHERE user_id = ?", USER_COLUMNS),
                [user_id],
                user_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get a user by login email.
    pub fn get_user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS),
                [email],
                user_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Check whether an email is already registered.
    pub fn email_registered(&self, email: &str) -> DbResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM users WHERE email = ?",
            [email],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Update the editable details of a user. The password is untouched.
    pub fn update_user_details(&self, user_id: &str, update: &UserDetailsUpdate) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE users SET
                username = ?2,
                email = ?3,
                address = ?4,
                phone = ?5,
                updated_at = ?6
            WHERE user_id = ?1
            "#,
            params![
                user_id,
                update.username,
                update.email,
                update.address,
                update.phone,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(email: &str) -> User {
        let mut user = User::new("Ann Smith".into(), email.into(), "$argon2id$x".into(), "1 High Street".into());
        user.phone = Some("07700900123".into());
        user
    }

    #[test]
    fn test_insert_and_get() {
        let db = Database::open_in_memory().unwrap();
        let user = make_user("ann@example.com");
        db.insert_user(&user).unwrap();

        let retrieved = db.get_user(&user.user_id).unwrap().unwrap();
        assert_eq!(retrieved, user);

        let by_email = db.get_user_by_email("ann@example.com").unwrap().unwrap();
        assert_eq!(by_email.user_id, user.user_id);
    }

    #[test]
    fn test_duplicate_email_rejected_by_store() {
        let db = Database::open_in_memory().unwrap();
        db.insert_user(&make_user("ann@example.com")).unwrap();

        assert!(db.email_registered("ann@example.com").unwrap());
        assert!(db.insert_user(&make_user("ann@example.com")).is_err());
    }

    #[test]
    fn test_update_details_keeps_password() {
        let db = Database::open_in_memory().unwrap();
        let user = make_user("ann@example.com");
        db.insert_user(&user).unwrap();

        let update = UserDetailsUpdate {
            username: "Ann Jones".into(),
            email: "ann.jones@example.com".into(),
            address: "2 Low Street".into(),
            phone: None,
        };
        assert!(db.update_user_details(&user.user_id, &update).unwrap());

        let retrieved = db.get_user(&user.user_id).unwrap().unwrap();
        assert_eq!(retrieved.username, "Ann Jones");
        assert_eq!(retrieved.email, "ann.jones@example.com");
        assert_eq!(retrieved.phone, None);
        assert_eq!(retrieved.password_hash, user.password_hash);
    }

    #[test]
    fn test_update_unknown_user() {
        let db = Database::open_in_memory().unwrap();
        let update = UserDetailsUpdate::default();
        assert!(!db.update_user_details("missing", &update).unwrap());
    }
}
