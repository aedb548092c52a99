//! End-to-end tests through the exported `CarerDiaryCore` object.

use std::sync::Arc;

use carer_diary_core::auth::{AuthResult, PasswordHasher};
use carer_diary_core::{
    open_database_in_memory, CarerDiaryCore, CarerDiaryError, Database, DiaryCategory,
    FfiDoctorContactForm, FfiEmergencyContactForm, FfiNewDiaryEntry, FfiNewMedication,
    FfiRegistration, FfiUserDetailsUpdate, FixedClock,
};
use chrono::NaiveDate;

/// Reversible stand-in so tests skip Argon2's cost.
struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> AuthResult<String> {
        Ok(format!("plain${}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> AuthResult<bool> {
        Ok(hash == format!("plain${}", password))
    }
}

fn core_on(y: i32, m: u32, d: u32) -> CarerDiaryCore {
    CarerDiaryCore::with_parts(
        Database::open_in_memory().unwrap(),
        Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(y, m, d).unwrap())),
        Arc::new(PlainHasher),
        28,
    )
}

fn registration(email: &str) -> FfiRegistration {
    FfiRegistration {
        username: "Ann Smith".into(),
        email: email.into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        address: "1 High Street".into(),
        phone: None,
    }
}

fn logged_in(core: &CarerDiaryCore, email: &str) {
    core.register(registration(email)).unwrap();
    core.login(email.into(), "secret1".into()).unwrap();
}

#[test]
fn test_operations_require_login() {
    let core = core_on(2024, 3, 1);

    assert!(!core.is_logged_in().unwrap());
    assert!(matches!(core.list_medications(), Err(CarerDiaryError::NotAuthenticated)));
    assert!(matches!(core.get_latest_reminder(), Err(CarerDiaryError::NotAuthenticated)));
    assert!(matches!(
        core.upcoming_visits(DiaryCategory::GpVisit),
        Err(CarerDiaryError::NotAuthenticated)
    ));
}

#[test]
fn test_account_flow() {
    let core = core_on(2024, 3, 1);
    core.register(registration("ann@example.com")).unwrap();

    assert!(matches!(
        core.register(registration("ann@example.com")),
        Err(CarerDiaryError::EmailTaken(_))
    ));
    assert!(matches!(
        core.login("ann@example.com".into(), "wrong-password".into()),
        Err(CarerDiaryError::InvalidCredentials)
    ));
    assert!(matches!(
        core.login("bob@example.com".into(), "secret1".into()),
        Err(CarerDiaryError::UserNotFound)
    ));

    core.login("ann@example.com".into(), "secret1".into()).unwrap();
    assert_eq!(core.username().unwrap(), "Ann Smith");

    let details = core
        .update_user_details(FfiUserDetailsUpdate {
            username: "Ann Jones".into(),
            email: "ann@example.com".into(),
            address: "2 Low Road".into(),
            phone: Some("07700900123".into()),
        })
        .unwrap();
    assert_eq!(details.username, "Ann Jones");
    assert_eq!(core.user_details().unwrap().phone.as_deref(), Some("07700900123"));

    core.logout().unwrap();
    assert!(matches!(core.username(), Err(CarerDiaryError::NotAuthenticated)));
}

#[test]
fn test_reminder_through_api() {
    let core = core_on(2024, 1, 1);
    logged_in(&core, "ann@example.com");

    assert!(core.get_latest_reminder().unwrap().is_none());

    let reminder = core.set_reminder("2024-01-01".into(), 4).unwrap();
    assert_eq!(reminder.next_collection_date, "2024-01-29");
    assert_eq!(reminder.period_days, 28);

    let reminder = core.acknowledge_collection().unwrap();
    assert_eq!(reminder.initial_date, "2024-01-29");
    assert_eq!(reminder.next_collection_date, "2024-02-26");

    assert!(matches!(
        core.set_reminder("2024-01-01".into(), 0),
        Err(CarerDiaryError::InvalidInput(_))
    ));
    assert!(core.clear_reminder().unwrap());
}

#[test]
fn test_diary_and_upcoming_through_api() {
    let core = core_on(2024, 3, 1);
    logged_in(&core, "ann@example.com");

    for on in ["2024-03-20", "2024-04-01", "2024-03-01"] {
        core.add_diary_entry(
            DiaryCategory::GpVisit,
            FfiNewDiaryEntry {
                date: on.into(),
                time: "09:00".into(),
                description: "Review".into(),
            },
        )
        .unwrap();
    }

    let upcoming: Vec<String> = core
        .upcoming_visits(DiaryCategory::GpVisit)
        .unwrap()
        .into_iter()
        .map(|v| v.date)
        .collect();
    assert_eq!(upcoming, vec!["2024-03-01", "2024-03-20"]);

    let groups = core.all_upcoming_visits().unwrap();
    let counts: Vec<(DiaryCategory, usize)> = groups.iter().map(|g| (g.category, g.visits.len())).collect();
    assert_eq!(
        counts,
        vec![
            (DiaryCategory::GpVisit, 2),
            (DiaryCategory::HospitalVisit, 0),
            (DiaryCategory::DentistVisit, 0),
        ]
    );

    let tomorrow_fall = core.add_diary_entry(
        DiaryCategory::Fall,
        FfiNewDiaryEntry {
            date: "2024-03-02".into(),
            time: "07:15".into(),
            description: "Slipped in the bathroom".into(),
        },
    );
    assert!(matches!(tomorrow_fall, Err(CarerDiaryError::InvalidInput(_))));
    assert_eq!(core.list_diary_entries(DiaryCategory::GpVisit).unwrap().len(), 3);
}

#[test]
fn test_records_are_owner_scoped_through_api() {
    let core = core_on(2024, 3, 1);
    logged_in(&core, "ann@example.com");

    let med = core
        .add_medication(FfiNewMedication {
            medication_name: "Metformin".into(),
            dosage: "500 mg".into(),
            frequency: "twice daily".into(),
        })
        .unwrap();
    let contact = core
        .add_emergency_contact(FfiEmergencyContactForm {
            name: "Jane Doe".into(),
            mobile_phone: Some("07700900123".into()),
            ..Default::default()
        })
        .unwrap();
    let doctor = core
        .add_doctor_contact(FfiDoctorContactForm {
            contact_type: "GP".into(),
            name: "Priya Patel".into(),
            address: None,
            telephone: "01632960001".into(),
            email: "gp@surgery.example".into(),
        })
        .unwrap();

    core.logout().unwrap();
    logged_in(&core, "bob@example.com");

    assert!(core.list_medications().unwrap().is_empty());
    assert!(matches!(
        core.delete_medication(med.medication_id.clone()),
        Err(CarerDiaryError::NotFound(_))
    ));
    assert!(matches!(
        core.get_emergency_contact(contact.contact_id.clone()),
        Err(CarerDiaryError::NotFound(_))
    ));
    assert!(matches!(
        core.delete_doctor_contact(doctor.contact_id.clone()),
        Err(CarerDiaryError::NotFound(_))
    ));

    core.logout().unwrap();
    core.login("ann@example.com".into(), "secret1".into()).unwrap();
    assert_eq!(core.list_medications().unwrap().len(), 1);
    assert_eq!(core.get_doctor_contact(doctor.contact_id).unwrap().name, "Priya Patel");
}

#[test]
fn test_in_memory_factory() {
    let core = open_database_in_memory().unwrap();
    assert!(!core.is_logged_in().unwrap());
    assert!(matches!(core.list_doctor_contacts(), Err(CarerDiaryError::NotAuthenticated)));
}
