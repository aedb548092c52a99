//! Date window utility.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use super::{ScheduleError, ScheduleResult};

/// A value that supports whole-day calendar arithmetic.
pub trait CalendarDate: Copy + PartialOrd + std::fmt::Display {
    /// Shift by `days` (negative moves backwards), `None` on overflow.
    fn shift_days(self, days: i64) -> Option<Self>;
}

impl CalendarDate for NaiveDate {
    fn shift_days(self, days: i64) -> Option<Self> {
        if days >= 0 {
            self.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }
}

impl CalendarDate for NaiveDateTime {
    fn shift_days(self, days: i64) -> Option<Self> {
        if days >= 0 {
            self.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }
}

/// `date` moved `days` calendar days forward, keeping any time of day.
pub fn add_days<D: CalendarDate>(date: D, days: i64) -> ScheduleResult<D> {
    date.shift_days(days).ok_or_else(|| {
        ScheduleError::InvalidDate(format!("{} shifted by {} days is out of range", date, days))
    })
}

/// True iff `start <= date <= end`.
pub fn in_window<D: PartialOrd>(date: &D, start: &D, end: &D) -> bool {
    start <= date && date <= end
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// For timestamps the calendar date as written is kept; the offset is not
/// applied.
pub fn parse_date(input: &str) -> ScheduleResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScheduleError::InvalidDate("date is empty".into()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| ScheduleError::InvalidDate(format!("unrecognised date: {:?}", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_crosses_month_and_leap_day() {
        assert_eq!(add_days(date(2024, 1, 1), 28).unwrap(), date(2024, 1, 29));
        assert_eq!(add_days(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_days(date(2023, 2, 28), 1).unwrap(), date(2023, 3, 1));
        assert_eq!(add_days(date(2024, 3, 1), -1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_add_days_keeps_time_of_day() {
        let start = date(2024, 3, 30).and_hms_opt(14, 45, 0).unwrap();
        let shifted = add_days(start, 2).unwrap();
        assert_eq!(shifted, date(2024, 4, 1).and_hms_opt(14, 45, 0).unwrap());
    }

    #[test]
    fn test_add_days_overflow_is_invalid_date() {
        assert!(matches!(add_days(NaiveDate::MAX, 1), Err(ScheduleError::InvalidDate(_))));
    }

    #[test]
    fn test_in_window_inclusive() {
        let start = date(2024, 3, 1);
        let end = date(2024, 3, 29);
        assert!(in_window(&start, &start, &end));
        assert!(in_window(&end, &start, &end));
        assert!(!in_window(&date(2024, 2, 29), &start, &end));
        assert!(!in_window(&date(2024, 3, 30), &start, &end));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-01-01").unwrap(), date(2024, 1, 1));
        assert_eq!(parse_date(" 2024-01-01 ").unwrap(), date(2024, 1, 1));
        assert_eq!(parse_date("2024-01-01T00:00:00.000Z").unwrap(), date(2024, 1, 1));
        assert_eq!(parse_date("2024-01-01T23:30:00+05:00").unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        for bad in ["", "soon", "2024-02-30", "01/02/2024", "Invalid Date"] {
            assert!(
                matches!(parse_date(bad), Err(ScheduleError::InvalidDate(_))),
                "{bad:?} should not parse"
            );
        }
    }
}
