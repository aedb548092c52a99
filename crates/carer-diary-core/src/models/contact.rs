//! Contact models (emergency contacts and doctors).

use serde::{Deserialize, Serialize};

/// A family member, friend or neighbour to call in an emergency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContact {
    /// Unique contact ID
    pub contact_id: String,
    /// Owning user ID
    pub owner_id: String,
    /// Contact name (letters and spaces)
    pub name: String,
    /// Home phone (11 digits)
    pub home_phone: Option<String>,
    /// Work phone (11 digits)
    pub work_phone: Option<String>,
    /// Mobile phone (11 digits)
    pub mobile_phone: Option<String>,
    /// Relationship to the cared-for person (e.g., "daughter")
    pub relation_type: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl EmergencyContact {
    /// Create a new emergency contact from a validated form.
    pub fn new(owner_id: String, form: EmergencyContactForm) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            contact_id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            name: form.name,
            home_phone: form.home_phone,
            work_phone: form.work_phone,
            mobile_phone: form.mobile_phone,
            relation_type: form.relation_type,
            email: form.email,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Overwrite the editable fields from a validated form.
    pub fn apply(&mut self, form: EmergencyContactForm) {
        self.name = form.name;
        self.home_phone = form.home_phone;
        self.work_phone = form.work_phone;
        self.mobile_phone = form.mobile_phone;
        self.relation_type = form.relation_type;
        self.email = form.email;
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Emergency contact form, used for both add and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContactForm {
    pub name: String,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub relation_type: Option<String>,
    pub email: Option<String>,
}

/// A doctor's or consultant's contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorContact {
    /// Unique contact ID
    pub contact_id: String,
    /// Owning user ID
    pub owner_id: String,
    /// Kind of practitioner (e.g., "GP", "Consultant")
    pub contact_type: String,
    /// Practitioner name (letters and spaces)
    pub name: String,
    /// Practice address
    pub address: Option<String>,
    /// Practice telephone (11 digits)
    pub telephone: String,
    /// Practice email
    pub email: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl DoctorContact {
    /// Create a new doctor contact from a validated form.
    pub fn new(owner_id: String, form: DoctorContactForm) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            contact_id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            contact_type: form.contact_type,
            name: form.name,
            address: form.address,
            telephone: form.telephone,
            email: form.email,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Overwrite the editable fields from a validated form.
    pub fn apply(&mut self, form: DoctorContactForm) {
        self.contact_type = form.contact_type;
        self.name = form.name;
        self.address = form.address;
        self.telephone = form.telephone;
        self.email = form.email;
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Doctor contact form, used for both add and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoctorContactForm {
    pub contact_type: String,
    pub name: String,
    pub address: Option<String>,
    pub telephone: String,
    pub email: String,
}
