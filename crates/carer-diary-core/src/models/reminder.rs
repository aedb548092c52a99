//! Medication collection reminder model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single active medication-collection reminder for a user.
///
/// `next_collection_date` is always `initial_date + 7 * frequency_weeks`.
/// It is stored alongside the inputs so reads never recompute it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    /// Owning user ID (at most one reminder per owner)
    pub owner_id: String,
    /// Date the current collection cycle started
    pub initial_date: NaiveDate,
    /// Collection interval in weeks (always positive)
    pub frequency_weeks: u32,
    /// Date the medication is next due for collection
    pub next_collection_date: NaiveDate,
    /// Last write timestamp
    pub updated_at: String,
}

impl Reminder {
    /// Length of one collection cycle in days.
    pub fn period_days(&self) -> i64 {
        i64::from(self.frequency_weeks) * 7
    }
}
