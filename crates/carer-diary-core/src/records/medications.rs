//! Medication gateway operations.

use super::{RecordGateway, RecordResult};
use crate::auth::Session;
use crate::models::{Medication, NewMedication};
use crate::validation::{self, Validator};

impl RecordGateway<'_> {
    /// Add a medication. All fields are required and the dosage must start
    /// with a non-negative amount.
    pub fn add_medication(&self, session: &Session, form: &NewMedication) -> RecordResult<Medication> {
        let owner_id = session.require_owner()?;
        let amount = validation::dosage_amount(&form.dosage);

        Validator::new()
            .require(&form.medication_name, "Medication name is required")
            .require(&form.dosage, "Dosage is required")
            .require(&form.frequency, "Frequency is required")
            .check(
                form.dosage.trim().is_empty() || amount.is_some_and(|a| a >= 0.0),
                "Dosage must be a non-negative number",
            )
            .finish()?;

        self.create(Medication::new(
            owner_id.to_string(),
            form.medication_name.trim().to_string(),
            form.dosage.trim().to_string(),
            form.frequency.trim().to_string(),
        ))
    }

    /// The caller's medications.
    pub fn list_medications(&self, session: &Session) -> RecordResult<Vec<Medication>> {
        self.list(session)
    }

    /// Delete one of the caller's medications.
    pub fn delete_medication(&self, session: &Session, medication_id: &str) -> RecordResult<()> {
        self.delete::<Medication>(session, medication_id)
    }
}
