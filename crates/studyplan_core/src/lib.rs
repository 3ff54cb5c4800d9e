//! Core domain logic for the study planner.
//! Turns free-form course text into 7-day revision plannings and keeps
//! their day-completion progress.

pub mod db;
pub mod library;
pub mod logging;
pub mod model;
pub mod planner;
pub mod repo;
pub mod service;

pub use library::digest::digest_content;
pub use library::linker::{
    all_courses, all_folders, courses_in_folder, extract_images, extract_text, find_course,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::library::{
    Course, CourseId, ImageFile, Library, LibraryNode, LibraryNodeId, NodeKind, PdfFile,
};
pub use model::planning::{
    ChapterId, Planning, PlanningDay, PlanningId, PlanningValidationError, PLANNING_DAY_COUNT,
};
pub use planner::{transform, transform_at};
pub use repo::planning_repo::{PlanningRepository, SqlitePlanningRepository};
pub use repo::progress_repo::{ProgressRepository, SqliteProgressRepository};
pub use repo::{RepoError, RepoResult};
pub use service::planning_service::{PlanningService, PlanningServiceError};
pub use service::progress_service::ProgressService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
