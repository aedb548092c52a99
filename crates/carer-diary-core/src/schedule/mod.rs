//! Medication reminder scheduling and upcoming-visit windowing.
//!
//! Both are pure date arithmetic over stored dates. Nothing here runs in the
//! background: a reminder is passive data, re-evaluated only when read.

mod dates;
mod reminder;
mod upcoming;

pub use dates::*;
pub use reminder::*;
pub use upcoming::*;

use thiserror::Error;

use crate::auth::Unauthenticated;
use crate::db::DbError;

/// Scheduling errors.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error(transparent)]
    Unauthenticated(#[from] Unauthenticated),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store failure: {0}")]
    Store(#[from] DbError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
