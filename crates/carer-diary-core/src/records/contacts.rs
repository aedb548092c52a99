//! Emergency and doctor contact gateway operations.

use super::{RecordError, RecordGateway, RecordResult};
use crate::auth::Session;
use crate::models::{DoctorContact, DoctorContactForm, EmergencyContact, EmergencyContactForm};
use crate::validation::{self, normalize_optional, ValidationError, Validator};

/// Trim and check an emergency contact form.
fn clean_emergency_form(form: &EmergencyContactForm) -> Result<EmergencyContactForm, ValidationError> {
    let cleaned = EmergencyContactForm {
        name: form.name.trim().to_string(),
        home_phone: normalize_optional(form.home_phone.clone()),
        work_phone: normalize_optional(form.work_phone.clone()),
        mobile_phone: normalize_optional(form.mobile_phone.clone()),
        relation_type: normalize_optional(form.relation_type.clone()),
        email: normalize_optional(form.email.clone()),
    };

    Validator::new()
        .check(
            validation::is_person_name(&cleaned.name),
            "Name should only contain letters and spaces.",
        )
        .optional_phone(cleaned.home_phone.as_deref(), "Home Phone must be exactly 11 digits.")
        .optional_phone(cleaned.work_phone.as_deref(), "Work Phone must be exactly 11 digits.")
        .optional_phone(cleaned.mobile_phone.as_deref(), "Mobile Phone must be exactly 11 digits.")
        .optional_email(cleaned.email.as_deref(), "Email is invalid.")
        .finish()?;

    Ok(cleaned)
}

/// Trim and check a doctor contact form.
fn clean_doctor_form(form: &DoctorContactForm) -> Result<DoctorContactForm, ValidationError> {
    let cleaned = DoctorContactForm {
        contact_type: form.contact_type.trim().to_string(),
        name: form.name.trim().to_string(),
        address: normalize_optional(form.address.clone()),
        telephone: form.telephone.trim().to_string(),
        email: form.email.trim().to_string(),
    };

    Validator::new()
        .require(&cleaned.contact_type, "Contact type is required.")
        .check(
            validation::is_person_name(&cleaned.name),
            "Name should only contain letters and spaces.",
        )
        .check(
            validation::is_phone_number(&cleaned.telephone),
            "Telephone must be exactly 11 digits.",
        )
        .check(validation::is_email(&cleaned.email), "Email is invalid.")
        .finish()?;

    Ok(cleaned)
}

impl RecordGateway<'_> {
    pub fn add_emergency_contact(
        &self,
        session: &Session,
        form: &EmergencyContactForm,
    ) -> RecordResult<EmergencyContact> {
        let owner_id = session.require_owner()?;
        let form = clean_emergency_form(form)?;
        self.create(EmergencyContact::new(owner_id.to_string(), form))
    }

    pub fn list_emergency_contacts(&self, session: &Session) -> RecordResult<Vec<EmergencyContact>> {
        self.list(session)
    }

    pub fn get_emergency_contact(&self, session: &Session, contact_id: &str) -> RecordResult<EmergencyContact> {
        self.get(session, contact_id)
    }

    /// Replace the editable fields of one of the caller's emergency contacts.
    pub fn edit_emergency_contact(
        &self,
        session: &Session,
        contact_id: &str,
        form: &EmergencyContactForm,
    ) -> RecordResult<EmergencyContact> {
        let form = clean_emergency_form(form)?;
        let mut contact: EmergencyContact = self.get(session, contact_id)?;
        contact.apply(form);

        if !self.db.update_emergency_contact(&contact)? {
            return Err(RecordError::NotFound(format!("emergency contact {}", contact_id)));
        }
        tracing::info!(owner_id = %contact.owner_id, contact_id, "Updated emergency contact");
        Ok(contact)
    }

    pub fn delete_emergency_contact(&self, session: &Session, contact_id: &str) -> RecordResult<()> {
        self.delete::<EmergencyContact>(session, contact_id)
    }

    pub fn add_doctor_contact(&self, session: &Session, form: &DoctorContactForm) -> RecordResult<DoctorContact> {
        let owner_id = session.require_owner()?;
        let form = clean_doctor_form(form)?;
        self.create(DoctorContact::new(owner_id.to_string(), form))
    }

    pub fn list_doctor_contacts(&self, session: &Session) -> RecordResult<Vec<DoctorContact>> {
        self.list(session)
    }

    pub fn get_doctor_contact(&self, session: &Session, contact_id: &str) -> RecordResult<DoctorContact> {
        self.get(session, contact_id)
    }

    /// Replace the editable fields of one of the caller's doctor contacts.
    pub fn update_doctor_contact(
        &self,
        session: &Session,
        contact_id: &str,
        form: &DoctorContactForm,
    ) -> RecordResult<DoctorContact> {
        let form = clean_doctor_form(form)?;
        let mut contact: DoctorContact = self.get(session, contact_id)?;
        contact.apply(form);

        if !self.db.update_doctor_contact(&contact)? {
            return Err(RecordError::NotFound(format!("doctor contact {}", contact_id)));
        }
        tracing::info!(owner_id = %contact.owner_id, contact_id, "Updated doctor contact");
        Ok(contact)
    }

    pub fn delete_doctor_contact(&self, session: &Session, contact_id: &str) -> RecordResult<()> {
        self.delete::<DoctorContact>(session, contact_id)
    }
}
