//! Planning domain model.
//!
//! # Responsibility
//! - Define the 7-day revision schedule record produced by the transformer.
//! - Provide day-completion helpers that never touch tasks or dates.
//!
//! # Invariants
//! - A planning always holds exactly `PLANNING_DAY_COUNT` days.
//! - `day_num` runs 1..=7 in order; dates are spaced by exactly one day.
//! - Ids are time-ordered and never reused for another planning.
//!
//! # See also
//! - `crate::planner::transform`

use super::library::{CourseId, ImageFile};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Number of days in every generated planning.
pub const PLANNING_DAY_COUNT: usize = 7;

/// Stable identifier of one planning.
pub type PlanningId = Uuid;

/// Identifier of the chapter a planning was generated for.
pub type ChapterId = Uuid;

/// Validation errors for the planning shape invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningValidationError {
    /// Day list length differs from `PLANNING_DAY_COUNT`.
    DayCount(usize),
    /// Day at `index` carries an unexpected `day_num`.
    DayNumber { index: usize, day_num: u8 },
    /// Day at `index` is not exactly one day after its predecessor.
    DateSpacing { index: usize },
    /// Requested day number does not exist in this planning.
    UnknownDay(u8),
}

impl Display for PlanningValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayCount(count) => write!(
                f,
                "planning must have {PLANNING_DAY_COUNT} days, found {count}"
            ),
            Self::DayNumber { index, day_num } => write!(
                f,
                "day at index {index} must have day_num {}, found {day_num}",
                index + 1
            ),
            Self::DateSpacing { index } => write!(
                f,
                "day at index {index} must be exactly one day after the previous day"
            ),
            Self::UnknownDay(day_num) => write!(f, "planning has no day {day_num}"),
        }
    }
}

impl Error for PlanningValidationError {}

/// One day of a revision schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningDay {
    /// 1-based day index.
    pub day_num: u8,
    /// Planning creation instant shifted by `day_num - 1` days.
    pub date: DateTime<Utc>,
    /// At most five task lines, in display order.
    pub tasks: Vec<String>,
    pub completed: bool,
}

/// Complete 7-day revision schedule.
///
/// Field names are serialized in camelCase to match the schema consumed by
/// the UI/storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planning {
    pub id: PlanningId,
    pub chapter_id: ChapterId,
    pub chapter_name: String,
    pub days: Vec<PlanningDay>,
    /// Populated by callers after generation.
    pub linked_course_ids: Vec<CourseId>,
    /// Populated by callers after generation.
    pub linked_images: Vec<ImageFile>,
    pub created_at: DateTime<Utc>,
}

impl Planning {
    /// Checks the day-count, day-number and date-spacing invariants.
    pub fn validate(&self) -> Result<(), PlanningValidationError> {
        if self.days.len() != PLANNING_DAY_COUNT {
            return Err(PlanningValidationError::DayCount(self.days.len()));
        }

        for (index, day) in self.days.iter().enumerate() {
            if usize::from(day.day_num) != index + 1 {
                return Err(PlanningValidationError::DayNumber {
                    index,
                    day_num: day.day_num,
                });
            }
        }

        for (index, pair) in self.days.windows(2).enumerate() {
            if pair[1].date - pair[0].date != Duration::days(1) {
                return Err(PlanningValidationError::DateSpacing { index: index + 1 });
            }
        }

        Ok(())
    }

    /// Flips the completion flag of one day and returns the new state.
    pub fn toggle_day(&mut self, day_num: u8) -> Result<bool, PlanningValidationError> {
        let day = self
            .days
            .iter_mut()
            .find(|day| day.day_num == day_num)
            .ok_or(PlanningValidationError::UnknownDay(day_num))?;
        day.completed = !day.completed;
        Ok(day.completed)
    }

    /// Marks every day as not completed.
    pub fn reset_progress(&mut self) {
        for day in &mut self.days {
            day.completed = false;
        }
    }

    /// Returns how many days are completed.
    pub fn completed_days(&self) -> usize {
        self.days.iter().filter(|day| day.completed).count()
    }

    /// Returns the rounded share of completed days, 0..=100.
    pub fn completion_percentage(&self) -> u8 {
        percentage(self.completed_days(), self.days.len())
    }

    /// Returns whether every day is completed.
    ///
    /// A planning without days is never considered complete.
    pub fn is_fully_completed(&self) -> bool {
        !self.days.is_empty() && self.days.iter().all(|day| day.completed)
    }
}

/// Rounds `part / total` to a whole percentage; zero when `total` is zero.
pub(crate) fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = (part as f64 / total as f64 * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}
