//! Day-completion progress use-cases.
//!
//! # Responsibility
//! - Toggle and reset per-day completion through the progress store.
//! - Derive completion figures for a planning from stored flags.
//!
//! # Invariants
//! - Progress changes never alter planning tasks or dates.
//! - Reset only affects the targeted planning.

use crate::model::planning::{percentage, Planning, PlanningId};
use crate::repo::progress_repo::ProgressRepository;
use crate::repo::RepoResult;
use log::info;

/// Progress service facade over a progress store.
pub struct ProgressService<R: ProgressRepository> {
    repo: R,
}

impl<R: ProgressRepository> ProgressService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Flips one day's flag and returns the new state.
    pub fn toggle_day(&self, planning_id: PlanningId, day_num: u8) -> RepoResult<bool> {
        let completed = !self.repo.day_status(planning_id, day_num)?;
        self.repo.set_day_status(planning_id, day_num, completed)?;
        info!(
            "event=progress_toggle module=service status=ok planning_id={planning_id} day_num={day_num} completed={completed}"
        );
        Ok(completed)
    }

    /// Returns one day's stored flag; unknown entries are `false`.
    pub fn day_status(&self, planning_id: PlanningId, day_num: u8) -> RepoResult<bool> {
        self.repo.day_status(planning_id, day_num)
    }

    /// Forgets every stored flag of one planning.
    pub fn reset(&self, planning_id: PlanningId) -> RepoResult<()> {
        self.repo.clear_progress(planning_id)?;
        info!("event=progress_reset module=service status=ok planning_id={planning_id}");
        Ok(())
    }

    /// Rounded share of stored `true` flags over the planning's day count.
    pub fn completion_percentage(&self, planning: &Planning) -> RepoResult<u8> {
        let progress = self.repo.list_progress(planning.id)?;
        let completed = progress.values().filter(|completed| **completed).count();
        Ok(percentage(completed, planning.days.len()))
    }

    /// Returns whether every day of `planning` is stored as completed.
    pub fn is_fully_completed(&self, planning: &Planning) -> RepoResult<bool> {
        let progress = self.repo.list_progress(planning.id)?;
        Ok(planning
            .days
            .iter()
            .all(|day| progress.get(&day.day_num).copied().unwrap_or(false)))
    }

    /// Copies stored flags into `planning.days[*].completed`.
    pub fn apply_progress(&self, planning: &mut Planning) -> RepoResult<()> {
        let progress = self.repo.list_progress(planning.id)?;
        for day in &mut planning.days {
            day.completed = progress.get(&day.day_num).copied().unwrap_or(false);
        }
        Ok(())
    }
}
