//! Medication models.

use serde::{Deserialize, Serialize};

/// A medication the cared-for person takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Unique medication ID
    pub medication_id: String,
    /// Owning user ID
    pub owner_id: String,
    /// Medication name
    pub medication_name: String,
    /// Dosage amount with unit (e.g., "5 mg", "2.5 ml")
    pub dosage: String,
    /// How often it is taken (e.g., "twice daily")
    pub frequency: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Medication {
    /// Create a new medication entry.
    pub fn new(owner_id: String, medication_name: String, dosage: String, frequency: String) -> Self {
        Self {
            medication_id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            medication_name,
            dosage,
            frequency,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Medication form as submitted by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewMedication {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
}
