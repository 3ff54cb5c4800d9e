//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Planning writes and reads enforce `Planning::validate()`.
//! - Progress is keyed by `(planning_id, day_num)` and stored apart from the
//!   planning record.

pub mod planning_repo;
pub mod progress_repo;

use crate::db::DbError;
use crate::model::planning::{PlanningId, PlanningValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for planning and progress persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(PlanningValidationError),
    Db(DbError),
    NotFound(PlanningId),
    /// Day number outside 1..=7.
    InvalidDay(u8),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "planning not found: {id}"),
            Self::InvalidDay(day_num) => write!(f, "day number must be within 1..=7, got {day_num}"),
            Self::InvalidData(message) => write!(f, "invalid persisted planning data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidDay(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<PlanningValidationError> for RepoError {
    fn from(value: PlanningValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
