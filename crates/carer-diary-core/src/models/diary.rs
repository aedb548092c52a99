//! Diary entry models.
//!
//! All five diary kinds share one shape and one table. They are told apart
//! by [`DiaryCategory`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of diary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum DiaryCategory {
    /// A fall at home or elsewhere
    Fall,
    /// A medical issue noticed by the carer
    MedicalIssue,
    /// GP appointment
    GpVisit,
    /// Hospital appointment
    HospitalVisit,
    /// Dentist appointment
    DentistVisit,
}

impl DiaryCategory {
    /// Every category, in display order.
    pub const ALL: [DiaryCategory; 5] = [
        DiaryCategory::Fall,
        DiaryCategory::MedicalIssue,
        DiaryCategory::GpVisit,
        DiaryCategory::HospitalVisit,
        DiaryCategory::DentistVisit,
    ];

    /// Stable storage tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiaryCategory::Fall => "fall",
            DiaryCategory::MedicalIssue => "medical_issue",
            DiaryCategory::GpVisit => "gp_visit",
            DiaryCategory::HospitalVisit => "hospital_visit",
            DiaryCategory::DentistVisit => "dentist_visit",
        }
    }

    /// Parse a storage tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }

    /// Visits are appointments and may be scheduled ahead.
    pub fn is_visit(&self) -> bool {
        matches!(
            self,
            DiaryCategory::GpVisit | DiaryCategory::HospitalVisit | DiaryCategory::DentistVisit
        )
    }

    /// Falls and medical issues record things that already happened.
    pub fn allows_future_dates(&self) -> bool {
        self.is_visit()
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DiaryCategory::Fall => "fall",
            DiaryCategory::MedicalIssue => "medical issue",
            DiaryCategory::GpVisit => "GP visit",
            DiaryCategory::HospitalVisit => "hospital visit",
            DiaryCategory::DentistVisit => "dentist visit",
        }
    }
}

impl std::fmt::Display for DiaryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A dated diary entry. Immutable once created except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    /// Unique entry ID
    pub entry_id: String,
    /// Owning user ID
    pub owner_id: String,
    /// Entry kind
    pub category: DiaryCategory,
    /// Calendar date of the event or appointment
    pub date: NaiveDate,
    /// Free-form time of day (e.g., "10:30")
    pub time: String,
    /// What happened or what the visit is for
    pub description: String,
    /// Creation timestamp
    pub created_at: String,
}

impl DiaryEntry {
    /// Create a new diary entry.
    pub fn new(
        owner_id: String,
        category: DiaryCategory,
        date: NaiveDate,
        time: String,
        description: String,
    ) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            category,
            date,
            time,
            description,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Diary form as submitted by the user. The date is still raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewDiaryEntry {
    pub date: String,
    pub time: String,
    pub description: String,
}
