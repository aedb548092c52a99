//! Diary gateway operations (falls, medical issues and visits).

use super::{RecordGateway, RecordResult};
use crate::auth::Session;
use crate::models::{DiaryCategory, DiaryEntry, NewDiaryEntry};
use crate::schedule::parse_date;
use crate::validation::{ValidationError, Validator};

impl RecordGateway<'_> {
    /// Add a diary entry of `category`.
    ///
    /// Falls and medical issues already happened, so their date may not be
    /// after today. Visits may be booked ahead.
    pub fn add_diary_entry(
        &self,
        session: &Session,
        category: DiaryCategory,
        form: &NewDiaryEntry,
    ) -> RecordResult<DiaryEntry> {
        let owner_id = session.require_owner()?;

        let date = parse_date(&form.date).map_err(|e| ValidationError::new(e.to_string()))?;
        let today = self.clock.today();

        Validator::new()
            .require(&form.time, "Time is required")
            .require(&form.description, "Description is required")
            .check(
                category.allows_future_dates() || date <= today,
                format!("A {} cannot be dated in the future", category),
            )
            .finish()?;

        self.create(DiaryEntry::new(
            owner_id.to_string(),
            category,
            date,
            form.time.trim().to_string(),
            form.description.trim().to_string(),
        ))
    }

    /// The caller's entries of one category, ordered by date then time.
    pub fn list_diary_entries(&self, session: &Session, category: DiaryCategory) -> RecordResult<Vec<DiaryEntry>> {
        let owner_id = session.require_owner()?;
        Ok(self.db.list_diary_entries(owner_id, category)?)
    }

    /// Delete one of the caller's diary entries.
    pub fn delete_diary_entry(&self, session: &Session, entry_id: &str) -> RecordResult<()> {
        self.delete::<DiaryEntry>(session, entry_id)
    }
}
