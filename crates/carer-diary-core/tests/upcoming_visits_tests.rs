//! Upcoming visit window integration tests.

use carer_diary_core::auth::Session;
use carer_diary_core::clock::FixedClock;
use carer_diary_core::db::Database;
use carer_diary_core::models::{DiaryCategory, NewDiaryEntry, User};
use carer_diary_core::records::RecordGateway;
use carer_diary_core::schedule::{ScheduleError, UpcomingVisits};
use chrono::NaiveDate;

fn setup() -> (Database, Session) {
    let db = Database::open_in_memory().unwrap();
    let user = User::new("Ann".into(), "ann@example.com".into(), "h".into(), "1 Road".into());
    db.insert_user(&user).unwrap();
    (db, Session::for_owner(user.user_id))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book(gateway: &RecordGateway<'_>, session: &Session, category: DiaryCategory, on: &str, time: &str) {
    let form = NewDiaryEntry {
        date: on.into(),
        time: time.into(),
        description: "Appointment".into(),
    };
    gateway.add_diary_entry(session, category, &form).unwrap();
}

#[test]
fn test_four_week_window_from_first_of_march() {
    let (db, session) = setup();
    let clock = FixedClock::on(date(2024, 3, 1));
    let gateway = RecordGateway::new(&db, &clock);

    book(&gateway, &session, DiaryCategory::GpVisit, "2024-04-01", "09:00");
    book(&gateway, &session, DiaryCategory::GpVisit, "2024-03-20", "09:00");
    book(&gateway, &session, DiaryCategory::GpVisit, "2024-03-01", "09:00");

    let visits = UpcomingVisits::new(&db, &clock)
        .upcoming(&session, DiaryCategory::GpVisit)
        .unwrap();
    let dates: Vec<NaiveDate> = visits.iter().map(|v| v.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 3, 20)]);
}

#[test]
fn test_window_edges() {
    let (db, session) = setup();
    let clock = FixedClock::on(date(2024, 3, 1));
    let gateway = RecordGateway::new(&db, &clock);

    book(&gateway, &session, DiaryCategory::DentistVisit, "2024-02-29", "09:00");
    book(&gateway, &session, DiaryCategory::DentistVisit, "2024-03-29", "09:00");
    book(&gateway, &session, DiaryCategory::DentistVisit, "2024-03-30", "09:00");

    let visits = UpcomingVisits::new(&db, &clock)
        .upcoming(&session, DiaryCategory::DentistVisit)
        .unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].date, date(2024, 3, 29));
}

#[test]
fn test_sorted_regardless_of_insertion_order() {
    let (db, session) = setup();
    let clock = FixedClock::on(date(2024, 3, 1));
    let gateway = RecordGateway::new(&db, &clock);

    book(&gateway, &session, DiaryCategory::HospitalVisit, "2024-03-15", "14:00");
    book(&gateway, &session, DiaryCategory::HospitalVisit, "2024-03-02", "11:00");
    book(&gateway, &session, DiaryCategory::HospitalVisit, "2024-03-15", "08:30");

    let visits = UpcomingVisits::new(&db, &clock)
        .upcoming(&session, DiaryCategory::HospitalVisit)
        .unwrap();
    let keys: Vec<(NaiveDate, &str)> = visits.iter().map(|v| (v.date, v.time.as_str())).collect();
    assert_eq!(
        keys,
        vec![
            (date(2024, 3, 2), "11:00"),
            (date(2024, 3, 15), "08:30"),
            (date(2024, 3, 15), "14:00"),
        ]
    );
}

#[test]
fn test_categories_and_owners_are_isolated() {
    let (db, session) = setup();
    let other = User::new("Bob".into(), "bob@example.com".into(), "h".into(), "2 Road".into());
    db.insert_user(&other).unwrap();
    let other_session = Session::for_owner(other.user_id);

    let clock = FixedClock::on(date(2024, 3, 1));
    let gateway = RecordGateway::new(&db, &clock);
    book(&gateway, &session, DiaryCategory::GpVisit, "2024-03-05", "09:00");
    book(&gateway, &other_session, DiaryCategory::GpVisit, "2024-03-06", "09:00");

    let upcoming = UpcomingVisits::new(&db, &clock);
    assert_eq!(upcoming.upcoming(&session, DiaryCategory::GpVisit).unwrap().len(), 1);
    assert!(upcoming.upcoming(&session, DiaryCategory::DentistVisit).unwrap().is_empty());
}

#[test]
fn test_custom_horizon_and_non_visit_category() {
    let (db, session) = setup();
    let clock = FixedClock::on(date(2024, 3, 1));
    let gateway = RecordGateway::new(&db, &clock);
    book(&gateway, &session, DiaryCategory::GpVisit, "2024-03-10", "09:00");

    let week = UpcomingVisits::new(&db, &clock).with_horizon(7);
    assert!(week.upcoming(&session, DiaryCategory::GpVisit).unwrap().is_empty());

    assert!(matches!(
        week.upcoming(&session, DiaryCategory::Fall),
        Err(ScheduleError::InvalidInput(_))
    ));
}
