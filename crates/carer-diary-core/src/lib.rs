//! Carer Diary Core Library
//!
//! Local record keeping for someone caring for a relative or friend: a
//! medication-collection reminder, falls and medical issues, GP / hospital /
//! dentist visits, medications, and emergency and doctor contacts.
//!
//! # Architecture
//!
//! ```text
//!                       CarerDiaryCore (FFI object, holds Session)
//!                                      │
//!          ┌───────────────┬───────────┼──────────────┬──────────────────┐
//!          ▼               ▼           ▼              ▼                  ▼
//!      Accounts     ReminderManager  UpcomingVisits  RecordGateway    Settings
//!    (auth + hash)    (schedule)      (schedule)     (records)        (config)
//!          │               │           │              │
//!          └───────────────┴─────┬─────┴──────────────┘
//!                                ▼
//!                     Database (SQLite, owner-scoped)
//! ```
//!
//! # Core Principle
//!
//! **Every record belongs to exactly one user.** Reads, updates and deletes
//! are always filtered by the session's owner; someone else's record looks
//! exactly like a missing one.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer and the generic owned-record store
//! - [`models`]: Domain types (Reminder, DiaryEntry, Medication, contacts, User)
//! - [`schedule`]: Reminder arithmetic and the upcoming-visit window
//! - [`records`]: Validated, owner-scoped CRUD for every record kind
//! - [`auth`]: Registration, login and sessions
//! - [`validation`]: Field rules shared by the above
//! - [`clock`]: Injectable "now"
//! - [`config`]: Layered settings and log setup

pub mod auth;
pub mod clock;
pub mod config;
pub mod db;
pub mod models;
pub mod records;
pub mod schedule;
pub mod validation;

// Re-export commonly used types
pub use auth::{Accounts, Argon2Hasher, PasswordHasher, Session};
pub use clock::{Clock, FixedClock, SystemClock};
pub use crate::config::Settings;
pub use db::Database;
pub use models::{
    DiaryCategory, DiaryEntry, DoctorContact, DoctorContactForm, EmergencyContact,
    EmergencyContactForm, Medication, NewDiaryEntry, NewMedication, Registration, Reminder, User,
    UserDetailsUpdate,
};
pub use records::RecordGateway;
pub use schedule::{ReminderManager, UpcomingVisits, DEFAULT_HORIZON_DAYS};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::path::Path;
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum CarerDiaryError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Store failure: {0}")]
    StoreFailure(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<db::DbError> for CarerDiaryError {
    fn from(e: db::DbError) -> Self {
        CarerDiaryError::StoreFailure(e.to_string())
    }
}

impl From<schedule::ScheduleError> for CarerDiaryError {
    fn from(e: schedule::ScheduleError) -> Self {
        use schedule::ScheduleError;
        match e {
            ScheduleError::Unauthenticated(_) => CarerDiaryError::NotAuthenticated,
            ScheduleError::InvalidDate(msg) | ScheduleError::InvalidInput(msg) => {
                CarerDiaryError::InvalidInput(msg)
            }
            ScheduleError::NotFound(what) => CarerDiaryError::NotFound(what),
            ScheduleError::Store(e) => e.into(),
        }
    }
}

impl From<records::RecordError> for CarerDiaryError {
    fn from(e: records::RecordError) -> Self {
        use records::RecordError;
        match e {
            RecordError::Unauthenticated(_) => CarerDiaryError::NotAuthenticated,
            RecordError::Validation(e) => CarerDiaryError::InvalidInput(e.to_string()),
            RecordError::NotFound(what) => CarerDiaryError::NotFound(what),
            RecordError::Store(e) => e.into(),
        }
    }
}

impl From<auth::AuthError> for CarerDiaryError {
    fn from(e: auth::AuthError) -> Self {
        use auth::AuthError;
        match e {
            AuthError::Unauthenticated(_) => CarerDiaryError::NotAuthenticated,
            AuthError::Validation(e) => CarerDiaryError::InvalidInput(e.to_string()),
            AuthError::EmailTaken(email) => CarerDiaryError::EmailTaken(email),
            AuthError::InvalidCredentials => CarerDiaryError::InvalidCredentials,
            AuthError::UserNotFound => CarerDiaryError::UserNotFound,
            AuthError::PasswordHash(msg) => CarerDiaryError::Internal(msg),
            AuthError::Store(e) => e.into(),
        }
    }
}

impl From<::config::ConfigError> for CarerDiaryError {
    fn from(e: ::config::ConfigError) -> Self {
        CarerDiaryError::Configuration(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CarerDiaryError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CarerDiaryError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<CarerDiaryCore>, CarerDiaryError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(CarerDiaryCore::with_parts(
        db,
        Arc::new(SystemClock),
        Arc::new(Argon2Hasher),
        DEFAULT_HORIZON_DAYS,
    )))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<CarerDiaryCore>, CarerDiaryError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(CarerDiaryCore::with_parts(
        db,
        Arc::new(SystemClock),
        Arc::new(Argon2Hasher),
        DEFAULT_HORIZON_DAYS,
    )))
}

/// Load settings (from `config_path`, or `carer-diary.toml` if present, then
/// `CARER_DIARY_*` variables), install logging and open the configured
/// database.
#[uniffi::export]
pub fn open_database_from_config(
    config_path: Option<String>,
) -> Result<Arc<CarerDiaryCore>, CarerDiaryError> {
    let settings = Settings::load(config_path.as_deref().map(Path::new))?;
    crate::config::init_tracing(&settings.log);

    let db = Database::open(&settings.database.path)?;
    Ok(Arc::new(CarerDiaryCore::with_parts(
        db,
        Arc::new(SystemClock),
        Arc::new(Argon2Hasher),
        settings.schedule.upcoming_horizon_days,
    )))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe diary handle for FFI. Holds the logged-in session.
#[derive(uniffi::Object)]
pub struct CarerDiaryCore {
    db: Arc<Mutex<Database>>,
    clock: Arc<dyn Clock>,
    hasher: Arc<dyn PasswordHasher>,
    session: Mutex<Session>,
    horizon_days: u32,
}

impl CarerDiaryCore {
    /// Assemble a handle from explicit parts (e.g. a [`FixedClock`] in tests).
    pub fn with_parts(
        db: Database,
        clock: Arc<dyn Clock>,
        hasher: Arc<dyn PasswordHasher>,
        horizon_days: u32,
    ) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            clock,
            hasher,
            session: Mutex::new(Session::anonymous()),
            horizon_days,
        }
    }

    fn session(&self) -> Result<Session, CarerDiaryError> {
        Ok(self.session.lock()?.clone())
    }
}

#[uniffi::export]
impl CarerDiaryCore {
    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Create an account. Does not log in.
    pub fn register(&self, form: FfiRegistration) -> Result<FfiUserDetails, CarerDiaryError> {
        let db = self.db.lock()?;
        let user = Accounts::new(&db, self.hasher.as_ref()).register(&form.into())?;
        Ok(user.into())
    }

    /// Log in and keep the session for subsequent calls.
    pub fn login(&self, email: String, password: String) -> Result<FfiUserDetails, CarerDiaryError> {
        let db = self.db.lock()?;
        let accounts = Accounts::new(&db, self.hasher.as_ref());
        let session = accounts.login(&email, &password)?;
        let user = accounts.user_details(&session)?;
        *self.session.lock()? = session;
        Ok(user.into())
    }

    pub fn logout(&self) -> Result<(), CarerDiaryError> {
        *self.session.lock()? = Session::anonymous();
        Ok(())
    }

    pub fn is_logged_in(&self) -> Result<bool, CarerDiaryError> {
        Ok(self.session()?.is_authenticated())
    }

    /// Display name for the greeting.
    pub fn username(&self) -> Result<String, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        Ok(Accounts::new(&db, self.hasher.as_ref()).username(&session)?)
    }

    pub fn user_details(&self) -> Result<FfiUserDetails, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let user = Accounts::new(&db, self.hasher.as_ref()).user_details(&session)?;
        Ok(user.into())
    }

    pub fn update_user_details(
        &self,
        update: FfiUserDetailsUpdate,
    ) -> Result<FfiUserDetails, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let user = Accounts::new(&db, self.hasher.as_ref())
            .update_user_details(&session, &update.into())?;
        Ok(user.into())
    }

    // =========================================================================
    // Reminder Operations
    // =========================================================================

    /// Create or replace the medication-collection reminder.
    pub fn set_reminder(
        &self,
        initial_date: String,
        frequency_weeks: i64,
    ) -> Result<FfiReminder, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let reminder = ReminderManager::new(&db).set_reminder(&session, &initial_date, frequency_weeks)?;
        Ok(reminder.into())
    }

    /// The current reminder, if one is set.
    pub fn get_latest_reminder(&self) -> Result<Option<FfiReminder>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let reminder = ReminderManager::new(&db).get_latest_reminder(&session)?;
        Ok(reminder.map(|r| r.into()))
    }

    /// Mark the due collection as done and roll forward one period.
    pub fn acknowledge_collection(&self) -> Result<FfiReminder, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let reminder = ReminderManager::new(&db).acknowledge_collection(&session)?;
        Ok(reminder.into())
    }

    /// Remove the reminder. False if none was set.
    pub fn clear_reminder(&self) -> Result<bool, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        Ok(ReminderManager::new(&db).clear_reminder(&session)?)
    }

    // =========================================================================
    // Upcoming Visits
    // =========================================================================

    /// Visits of `category` from today through the configured horizon.
    pub fn upcoming_visits(
        &self,
        category: DiaryCategory,
    ) -> Result<Vec<FfiDiaryEntry>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let visits = UpcomingVisits::new(&db, self.clock.as_ref())
            .with_horizon(self.horizon_days)
            .upcoming(&session, category)?;
        Ok(visits.into_iter().map(|v| v.into()).collect())
    }

    /// Upcoming visits for every visit category, for the dashboard.
    pub fn all_upcoming_visits(&self) -> Result<Vec<FfiUpcomingVisits>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let groups = UpcomingVisits::new(&db, self.clock.as_ref())
            .with_horizon(self.horizon_days)
            .upcoming_all(&session)?;
        Ok(groups
            .into_iter()
            .map(|(category, visits)| FfiUpcomingVisits {
                category,
                visits: visits.into_iter().map(|v| v.into()).collect(),
            })
            .collect())
    }

    // =========================================================================
    // Medication Operations
    // =========================================================================

    pub fn add_medication(&self, form: FfiNewMedication) -> Result<FfiMedication, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let med = RecordGateway::new(&db, self.clock.as_ref()).add_medication(&session, &form.into())?;
        Ok(med.into())
    }

    pub fn list_medications(&self) -> Result<Vec<FfiMedication>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let meds = RecordGateway::new(&db, self.clock.as_ref()).list_medications(&session)?;
        Ok(meds.into_iter().map(|m| m.into()).collect())
    }

    pub fn delete_medication(&self, medication_id: String) -> Result<(), CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        RecordGateway::new(&db, self.clock.as_ref()).delete_medication(&session, &medication_id)?;
        Ok(())
    }

    // =========================================================================
    // Diary Operations
    // =========================================================================

    pub fn add_diary_entry(
        &self,
        category: DiaryCategory,
        form: FfiNewDiaryEntry,
    ) -> Result<FfiDiaryEntry, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let entry = RecordGateway::new(&db, self.clock.as_ref())
            .add_diary_entry(&session, category, &form.into())?;
        Ok(entry.into())
    }

    pub fn list_diary_entries(
        &self,
        category: DiaryCategory,
    ) -> Result<Vec<FfiDiaryEntry>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let entries = RecordGateway::new(&db, self.clock.as_ref()).list_diary_entries(&session, category)?;
        Ok(entries.into_iter().map(|e| e.into()).collect())
    }

    pub fn delete_diary_entry(&self, entry_id: String) -> Result<(), CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        RecordGateway::new(&db, self.clock.as_ref()).delete_diary_entry(&session, &entry_id)?;
        Ok(())
    }

    // =========================================================================
    // Emergency Contact Operations
    // =========================================================================

    pub fn add_emergency_contact(
        &self,
        form: FfiEmergencyContactForm,
    ) -> Result<FfiEmergencyContact, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contact = RecordGateway::new(&db, self.clock.as_ref())
            .add_emergency_contact(&session, &form.into())?;
        Ok(contact.into())
    }

    pub fn list_emergency_contacts(&self) -> Result<Vec<FfiEmergencyContact>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contacts = RecordGateway::new(&db, self.clock.as_ref()).list_emergency_contacts(&session)?;
        Ok(contacts.into_iter().map(|c| c.into()).collect())
    }

    pub fn get_emergency_contact(
        &self,
        contact_id: String,
    ) -> Result<FfiEmergencyContact, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contact = RecordGateway::new(&db, self.clock.as_ref())
            .get_emergency_contact(&session, &contact_id)?;
        Ok(contact.into())
    }

    pub fn edit_emergency_contact(
        &self,
        contact_id: String,
        form: FfiEmergencyContactForm,
    ) -> Result<FfiEmergencyContact, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contact = RecordGateway::new(&db, self.clock.as_ref())
            .edit_emergency_contact(&session, &contact_id, &form.into())?;
        Ok(contact.into())
    }

    pub fn delete_emergency_contact(&self, contact_id: String) -> Result<(), CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        RecordGateway::new(&db, self.clock.as_ref()).delete_emergency_contact(&session, &contact_id)?;
        Ok(())
    }

    // =========================================================================
    // Doctor Contact Operations
    // =========================================================================

    pub fn add_doctor_contact(
        &self,
        form: FfiDoctorContactForm,
    ) -> Result<FfiDoctorContact, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contact = RecordGateway::new(&db, self.clock.as_ref())
            .add_doctor_contact(&session, &form.into())?;
        Ok(contact.into())
    }

    pub fn list_doctor_contacts(&self) -> Result<Vec<FfiDoctorContact>, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contacts = RecordGateway::new(&db, self.clock.as_ref()).list_doctor_contacts(&session)?;
        Ok(contacts.into_iter().map(|c| c.into()).collect())
    }

    pub fn get_doctor_contact(&self, contact_id: String) -> Result<FfiDoctorContact, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contact = RecordGateway::new(&db, self.clock.as_ref())
            .get_doctor_contact(&session, &contact_id)?;
        Ok(contact.into())
    }

    pub fn update_doctor_contact(
        &self,
        contact_id: String,
        form: FfiDoctorContactForm,
    ) -> Result<FfiDoctorContact, CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        let contact = RecordGateway::new(&db, self.clock.as_ref())
            .update_doctor_contact(&session, &contact_id, &form.into())?;
        Ok(contact.into())
    }

    pub fn delete_doctor_contact(&self, contact_id: String) -> Result<(), CarerDiaryError> {
        let session = self.session()?;
        let db = self.db.lock()?;
        RecordGateway::new(&db, self.clock.as_ref()).delete_doctor_contact(&session, &contact_id)?;
        Ok(())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe registration form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub phone: Option<String>,
}

impl From<FfiRegistration> for Registration {
    fn from(form: FfiRegistration) -> Self {
        Registration {
            username: form.username,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
            address: form.address,
            phone: form.phone,
        }
    }
}

/// FFI-safe user details (never carries the password hash).
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUserDetails {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub address: String,
    pub phone: Option<String>,
}

impl From<User> for FfiUserDetails {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            address: user.address,
            phone: user.phone,
        }
    }
}

/// FFI-safe user details update.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUserDetailsUpdate {
    pub username: String,
    pub email: String,
    pub address: String,
    pub phone: Option<String>,
}

impl From<FfiUserDetailsUpdate> for UserDetailsUpdate {
    fn from(update: FfiUserDetailsUpdate) -> Self {
        UserDetailsUpdate {
            username: update.username,
            email: update.email,
            address: update.address,
            phone: update.phone,
        }
    }
}

/// FFI-safe reminder. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiReminder {
    pub initial_date: String,
    pub frequency_weeks: u32,
    pub period_days: i64,
    pub next_collection_date: String,
    pub updated_at: String,
}

impl From<Reminder> for FfiReminder {
    fn from(reminder: Reminder) -> Self {
        Self {
            period_days: reminder.period_days(),
            initial_date: reminder.initial_date.to_string(),
            frequency_weeks: reminder.frequency_weeks,
            next_collection_date: reminder.next_collection_date.to_string(),
            updated_at: reminder.updated_at,
        }
    }
}

/// FFI-safe diary entry. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiaryEntry {
    pub entry_id: String,
    pub category: DiaryCategory,
    pub date: String,
    pub time: String,
    pub description: String,
    pub created_at: String,
}

impl From<DiaryEntry> for FfiDiaryEntry {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            category: entry.category,
            date: entry.date.to_string(),
            time: entry.time,
            description: entry.description,
            created_at: entry.created_at,
        }
    }
}

/// Upcoming visits of one category.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUpcomingVisits {
    pub category: DiaryCategory,
    pub visits: Vec<FfiDiaryEntry>,
}

/// FFI-safe diary form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewDiaryEntry {
    pub date: String,
    pub time: String,
    pub description: String,
}

impl From<FfiNewDiaryEntry> for NewDiaryEntry {
    fn from(form: FfiNewDiaryEntry) -> Self {
        NewDiaryEntry {
            date: form.date,
            time: form.time,
            description: form.description,
        }
    }
}

/// FFI-safe medication.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub medication_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub created_at: String,
}

impl From<Medication> for FfiMedication {
    fn from(med: Medication) -> Self {
        Self {
            medication_id: med.medication_id,
            medication_name: med.medication_name,
            dosage: med.dosage,
            frequency: med.frequency,
            created_at: med.created_at,
        }
    }
}

/// FFI-safe medication form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewMedication {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
}

impl From<FfiNewMedication> for NewMedication {
    fn from(form: FfiNewMedication) -> Self {
        NewMedication {
            medication_name: form.medication_name,
            dosage: form.dosage,
            frequency: form.frequency,
        }
    }
}

/// FFI-safe emergency contact.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEmergencyContact {
    pub contact_id: String,
    pub name: String,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub relation_type: Option<String>,
    pub email: Option<String>,
    pub updated_at: String,
}

impl From<EmergencyContact> for FfiEmergencyContact {
    fn from(contact: EmergencyContact) -> Self {
        Self {
            contact_id: contact.contact_id,
            name: contact.name,
            home_phone: contact.home_phone,
            work_phone: contact.work_phone,
            mobile_phone: contact.mobile_phone,
            relation_type: contact.relation_type,
            email: contact.email,
            updated_at: contact.updated_at,
        }
    }
}

/// FFI-safe emergency contact form.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiEmergencyContactForm {
    pub name: String,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub relation_type: Option<String>,
    pub email: Option<String>,
}

impl From<FfiEmergencyContactForm> for EmergencyContactForm {
    fn from(form: FfiEmergencyContactForm) -> Self {
        EmergencyContactForm {
            name: form.name,
            home_phone: form.home_phone,
            work_phone: form.work_phone,
            mobile_phone: form.mobile_phone,
            relation_type: form.relation_type,
            email: form.email,
        }
    }
}

/// FFI-safe doctor contact.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorContact {
    pub contact_id: String,
    pub contact_type: String,
    pub name: String,
    pub address: Option<String>,
    pub telephone: String,
    pub email: String,
    pub updated_at: String,
}

impl From<DoctorContact> for FfiDoctorContact {
    fn from(contact: DoctorContact) -> Self {
        Self {
            contact_id: contact.contact_id,
            contact_type: contact.contact_type,
            name: contact.name,
            address: contact.address,
            telephone: contact.telephone,
            email: contact.email,
            updated_at: contact.updated_at,
        }
    }
}

/// FFI-safe doctor contact form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorContactForm {
    pub contact_type: String,
    pub name: String,
    pub address: Option<String>,
    pub telephone: String,
    pub email: String,
}

impl From<FfiDoctorContactForm> for DoctorContactForm {
    fn from(form: FfiDoctorContactForm) -> Self {
        DoctorContactForm {
            contact_type: form.contact_type,
            name: form.name,
            address: form.address,
            telephone: form.telephone,
            email: form.email,
        }
    }
}
