//! Upcoming visit aggregator.

use super::{add_days, ScheduleError, ScheduleResult};
use crate::auth::Session;
use crate::clock::Clock;
use crate::db::Database;
use crate::models::{DiaryCategory, DiaryEntry};

/// Default forward-looking window, in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 28;

/// Lists visits falling within `[today, today + horizon]`.
pub struct UpcomingVisits<'a> {
    db: &'a Database,
    clock: &'a dyn Clock,
    horizon_days: u32,
}

impl<'a> UpcomingVisits<'a> {
    /// Aggregator with the default 28-day horizon.
    pub fn new(db: &'a Database, clock: &'a dyn Clock) -> Self {
        Self {
            db,
            clock,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Use a different horizon.
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// The caller's visits of `category` dated from today through today plus
    /// the horizon (both inclusive), earliest first. An empty list is a
    /// normal result.
    pub fn upcoming(&self, session: &Session, category: DiaryCategory) -> ScheduleResult<Vec<DiaryEntry>> {
        let owner_id = session.require_owner()?;
        if !category.is_visit() {
            return Err(ScheduleError::InvalidInput(format!(
                "{} entries are not visits",
                category
            )));
        }

        let start = self.clock.today();
        let end = add_days(start, i64::from(self.horizon_days))?;

        let visits = self
            .db
            .list_diary_entries_between(owner_id, category, start, end)?;

        tracing::debug!(
            owner_id,
            category = category.as_str(),
            %start,
            %end,
            count = visits.len(),
            "Listed upcoming visits"
        );
        Ok(visits)
    }

    /// Upcoming visits for every visit category, in category order.
    pub fn upcoming_all(&self, session: &Session) -> ScheduleResult<Vec<(DiaryCategory, Vec<DiaryEntry>)>> {
        DiaryCategory::ALL
            .into_iter()
            .filter(DiaryCategory::is_visit)
            .map(|category| self.upcoming(session, category).map(|visits| (category, visits)))
            .collect()
    }
}
