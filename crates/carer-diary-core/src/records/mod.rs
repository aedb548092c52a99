//! Record CRUD gateway.
//!
//! Thin, uniform operations over every user-owned record kind: resolve the
//! owner from the session, validate, do one store call. Gets, updates and
//! deletes are always scoped to the owner, so another user's record ID
//! behaves exactly like a missing one.

mod contacts;
mod diary;
mod medications;

use thiserror::Error;

use crate::auth::{Session, Unauthenticated};
use crate::clock::Clock;
use crate::db::{Database, DbError, OwnedRecord};
use crate::validation::ValidationError;

/// Record gateway errors.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Unauthenticated(#[from] Unauthenticated),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store failure: {0}")]
    Store(#[from] DbError),
}

pub type RecordResult<T> = Result<T, RecordError>;

/// Owner-scoped CRUD over medications, diary entries and contacts.
pub struct RecordGateway<'a> {
    db: &'a Database,
    clock: &'a dyn Clock,
}

impl<'a> RecordGateway<'a> {
    pub fn new(db: &'a Database, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    fn create<R: OwnedRecord>(&self, record: R) -> RecordResult<R> {
        self.db.insert_record(&record)?;
        tracing::info!(
            owner_id = record.owner_id(),
            record_id = record.record_id(),
            table = R::TABLE,
            "Created record"
        );
        Ok(record)
    }

    fn list<R: OwnedRecord>(&self, session: &Session) -> RecordResult<Vec<R>> {
        let owner_id = session.require_owner()?;
        let records = self.db.list_records::<R>(owner_id)?;
        tracing::debug!(owner_id, table = R::TABLE, count = records.len(), "Listed records");
        Ok(records)
    }

    fn get<R: OwnedRecord>(&self, session: &Session, record_id: &str) -> RecordResult<R> {
        let owner_id = session.require_owner()?;
        self.db
            .get_record::<R>(owner_id, record_id)?
            .ok_or_else(|| RecordError::NotFound(format!("{} {}", R::TABLE, record_id)))
    }

    fn delete<R: OwnedRecord>(&self, session: &Session, record_id: &str) -> RecordResult<()> {
        let owner_id = session.require_owner()?;
        if !self.db.delete_record::<R>(owner_id, record_id)? {
            tracing::warn!(owner_id, record_id, table = R::TABLE, "Delete of unknown record");
            return Err(RecordError::NotFound(format!("{} {}", R::TABLE, record_id)));
        }
        tracing::info!(owner_id, record_id, table = R::TABLE, "Deleted record");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::auth::Session;
    use crate::db::Database;
    use crate::models::User;

    /// In-memory database with two registered users.
    pub fn two_users() -> (Database, Session, Session) {
        let db = Database::open_in_memory().unwrap();
        let ann = User::new("Ann".into(), "ann@example.com".into(), "h".into(), "1 Road".into());
        let bob = User::new("Bob".into(), "bob@example.com".into(), "h".into(), "2 Road".into());
        db.insert_user(&ann).unwrap();
        db.insert_user(&bob).unwrap();
        (db, Session::for_owner(ann.user_id), Session::for_owner(bob.user_id))
    }
}
