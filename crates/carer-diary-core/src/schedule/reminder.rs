//! Reminder state manager.
//!
//! Each owner has at most one reminder. Setting a reminder replaces the
//! previous one wholesale; acknowledging a collection rolls the schedule
//! forward by exactly one period. The schedule never looks at the wall
//! clock, so missed acknowledgements do not catch up on their own.

use chrono::NaiveDate;

use super::{add_days, parse_date, ScheduleError, ScheduleResult};
use crate::auth::Session;
use crate::db::Database;
use crate::models::Reminder;

/// Owns the single active medication-collection reminder per user.
pub struct ReminderManager<'a> {
    db: &'a Database,
}

impl<'a> ReminderManager<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create or replace the caller's reminder.
    ///
    /// `initial_date` is `YYYY-MM-DD` or RFC 3339; `frequency_weeks` must be
    /// a positive number of weeks. Nothing is written if either is invalid.
    pub fn set_reminder(
        &self,
        session: &Session,
        initial_date: &str,
        frequency_weeks: i64,
    ) -> ScheduleResult<Reminder> {
        let owner_id = session.require_owner()?;

        let initial_date = parse_date(initial_date).map_err(|e| match e {
            ScheduleError::InvalidDate(msg) => ScheduleError::InvalidInput(msg),
            other => other,
        })?;
        let frequency_weeks = u32::try_from(frequency_weeks)
            .ok()
            .filter(|weeks| *weeks > 0)
            .ok_or_else(|| {
                ScheduleError::InvalidInput(format!(
                    "frequency must be a positive number of weeks, got {}",
                    frequency_weeks
                ))
            })?;

        let reminder = self.schedule(owner_id, initial_date, frequency_weeks)?;
        tracing::info!(
            owner_id,
            initial_date = %reminder.initial_date,
            frequency_weeks,
            next_collection_date = %reminder.next_collection_date,
            "Reminder set"
        );
        Ok(reminder)
    }

    /// The caller's reminder, or `None` when no reminder is set.
    pub fn get_latest_reminder(&self, session: &Session) -> ScheduleResult<Option<Reminder>> {
        let owner_id = session.require_owner()?;
        let reminder = self.db.get_reminder(owner_id)?;
        tracing::debug!(owner_id, found = reminder.is_some(), "Fetched reminder");
        Ok(reminder)
    }

    /// Record that the medication was collected: the current
    /// `next_collection_date` becomes the new `initial_date` and the schedule
    /// advances one period.
    pub fn acknowledge_collection(&self, session: &Session) -> ScheduleResult<Reminder> {
        let owner_id = session.require_owner()?;
        let current = self
            .db
            .get_reminder(owner_id)?
            .ok_or_else(|| ScheduleError::NotFound("no reminder set".into()))?;

        let reminder = self.schedule(owner_id, current.next_collection_date, current.frequency_weeks)?;
        tracing::info!(
            owner_id,
            collected_on = %current.next_collection_date,
            next_collection_date = %reminder.next_collection_date,
            "Medication collection acknowledged"
        );
        Ok(reminder)
    }

    /// Remove the caller's reminder. Returns false if there was none.
    pub fn clear_reminder(&self, session: &Session) -> ScheduleResult<bool> {
        let owner_id = session.require_owner()?;
        let cleared = self.db.delete_reminder(owner_id)?;
        tracing::info!(owner_id, cleared, "Reminder cleared");
        Ok(cleared)
    }

    /// Compute the next collection date and upsert.
    fn schedule(&self, owner_id: &str, initial_date: NaiveDate, frequency_weeks: u32) -> ScheduleResult<Reminder> {
        let next_collection_date = add_days(initial_date, i64::from(frequency_weeks) * 7)?;
        let reminder = Reminder {
            owner_id: owner_id.to_string(),
            initial_date,
            frequency_weeks,
            next_collection_date,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };
        self.db.upsert_reminder(&reminder)?;
        Ok(reminder)
    }
}
