//! Medication collection reminder integration tests.

use carer_diary_core::auth::Session;
use carer_diary_core::db::Database;
use carer_diary_core::models::User;
use carer_diary_core::schedule::{add_days, ReminderManager, ScheduleError};
use chrono::NaiveDate;
use proptest::prelude::*;

fn setup() -> (Database, Session) {
    let db = Database::open_in_memory().unwrap();
    let user = User::new("Ann".into(), "ann@example.com".into(), "h".into(), "1 Road".into());
    db.insert_user(&user).unwrap();
    (db, Session::for_owner(user.user_id))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_four_weekly_collection_cycle() {
    let (db, session) = setup();
    let manager = ReminderManager::new(&db);

    let reminder = manager.set_reminder(&session, "2024-01-01", 4).unwrap();
    assert_eq!(reminder.next_collection_date, date(2024, 1, 29));

    let reminder = manager.acknowledge_collection(&session).unwrap();
    assert_eq!(reminder.initial_date, date(2024, 1, 29));
    assert_eq!(reminder.next_collection_date, date(2024, 2, 26));

    let stored = manager.get_latest_reminder(&session).unwrap().unwrap();
    assert_eq!(stored, reminder);
}

#[test]
fn test_no_reminder_is_not_an_error() {
    let (db, session) = setup();
    let manager = ReminderManager::new(&db);

    assert!(manager.get_latest_reminder(&session).unwrap().is_none());
    assert!(!manager.clear_reminder(&session).unwrap());
    assert!(matches!(
        manager.acknowledge_collection(&session),
        Err(ScheduleError::NotFound(_))
    ));
}

#[test]
fn test_set_replaces_existing_reminder() {
    let (db, session) = setup();
    let manager = ReminderManager::new(&db);

    manager.set_reminder(&session, "2024-01-01", 4).unwrap();
    let reminder = manager.set_reminder(&session, "2024-06-10", 2).unwrap();

    assert_eq!(manager.get_latest_reminder(&session).unwrap(), Some(reminder));
    assert!(manager.clear_reminder(&session).unwrap());
    assert!(manager.get_latest_reminder(&session).unwrap().is_none());
}

#[test]
fn test_invalid_input_writes_nothing() {
    let (db, session) = setup();
    let manager = ReminderManager::new(&db);

    for (initial, weeks) in [("2024-01-01", 0), ("2024-01-01", -2), ("not a date", 4)] {
        assert!(matches!(
            manager.set_reminder(&session, initial, weeks),
            Err(ScheduleError::InvalidInput(_))
        ));
    }
    assert!(manager.get_latest_reminder(&session).unwrap().is_none());
}

#[test]
fn test_requires_login() {
    let (db, _) = setup();
    let manager = ReminderManager::new(&db);

    assert!(matches!(
        manager.set_reminder(&Session::anonymous(), "2024-01-01", 4),
        Err(ScheduleError::Unauthenticated(_))
    ));
}

proptest! {
    #[test]
    fn prop_next_collection_is_one_period_ahead(days in 0i64..20_000, weeks in 1i64..60) {
        let (db, session) = setup();
        let manager = ReminderManager::new(&db);
        let initial = add_days(date(2000, 1, 1), days).unwrap();

        let reminder = manager
            .set_reminder(&session, &initial.format("%Y-%m-%d").to_string(), weeks)
            .unwrap();

        prop_assert_eq!(reminder.initial_date, initial);
        prop_assert_eq!(reminder.next_collection_date, add_days(initial, weeks * 7).unwrap());
    }

    #[test]
    fn prop_two_acknowledgements_advance_two_periods(days in 0i64..20_000, weeks in 1i64..60) {
        let (db, session) = setup();
        let manager = ReminderManager::new(&db);
        let initial = add_days(date(2000, 1, 1), days).unwrap();

        manager
            .set_reminder(&session, &initial.format("%Y-%m-%d").to_string(), weeks)
            .unwrap();
        manager.acknowledge_collection(&session).unwrap();
        let reminder = manager.acknowledge_collection(&session).unwrap();

        prop_assert_eq!(reminder.initial_date, add_days(initial, 2 * weeks * 7).unwrap());
        prop_assert_eq!(reminder.next_collection_date, add_days(initial, 3 * weeks * 7).unwrap());
    }
}
