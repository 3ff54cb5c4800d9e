//! Planning use-case service.
//!
//! # Responsibility
//! - Turn pasted text or selected library courses into stored plannings.
//! - Provide read/list/delete entry points over planning storage.
//!
//! # Invariants
//! - Blank input text is rejected before the transformer runs.
//! - Course-based plannings link every selected course and its images.

use crate::library::linker::{courses_in_folder, extract_images, extract_text};
use crate::model::library::{Library, LibraryNodeId};
use crate::model::planning::{Planning, PlanningId};
use crate::planner::transform;
use crate::repo::planning_repo::PlanningRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for planning use-cases.
#[derive(Debug)]
pub enum PlanningServiceError {
    /// Input text is empty after trim.
    EmptyText,
    /// Selected library node holds no course.
    NoCourses(LibraryNodeId),
    /// Target planning does not exist.
    PlanningNotFound(PlanningId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PlanningServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "planning text must not be blank"),
            Self::NoCourses(node_id) => write!(f, "no course found under library node {node_id}"),
            Self::PlanningNotFound(id) => write!(f, "planning not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlanningServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PlanningServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::PlanningNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Planning service facade over repository implementations.
pub struct PlanningService<R: PlanningRepository> {
    repo: R,
}

impl<R: PlanningRepository> PlanningService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Generates and stores a planning from pasted text.
    pub fn create_from_text(
        &self,
        raw_text: &str,
        chapter_name: Option<&str>,
    ) -> Result<Planning, PlanningServiceError> {
        if raw_text.trim().is_empty() {
            return Err(PlanningServiceError::EmptyText);
        }

        let planning = transform(raw_text, chapter_name);
        self.repo.create_planning(&planning)?;
        info!(
            "event=planning_create module=service status=ok source=text planning_id={}",
            planning.id
        );
        Ok(planning)
    }

    /// Generates and stores a planning from every course under `node_id`.
    ///
    /// Course texts (and PDF texts) are concatenated in tree order; the
    /// courses and their images are linked to the planning.
    pub fn create_from_courses(
        &self,
        library: &Library,
        node_id: LibraryNodeId,
        chapter_name: Option<&str>,
    ) -> Result<Planning, PlanningServiceError> {
        let courses = courses_in_folder(node_id, &library.tree);
        if courses.is_empty() {
            return Err(PlanningServiceError::NoCourses(node_id));
        }

        let mut planning = transform(&extract_text(&courses), chapter_name);
        planning.linked_course_ids = courses.iter().map(|course| course.id).collect();
        planning.linked_images = extract_images(&courses);
        self.repo.create_planning(&planning)?;
        info!(
            "event=planning_create module=service status=ok source=library planning_id={} courses={} images={}",
            planning.id,
            planning.linked_course_ids.len(),
            planning.linked_images.len()
        );
        Ok(planning)
    }

    /// Gets one planning by id.
    pub fn get_planning(&self, id: PlanningId) -> RepoResult<Option<Planning>> {
        self.repo.get_planning(id)
    }

    /// Lists stored plannings, newest first.
    pub fn list_plannings(&self) -> RepoResult<Vec<Planning>> {
        self.repo.list_plannings()
    }

    /// Deletes a planning together with its stored progress.
    pub fn delete_planning(&self, id: PlanningId) -> Result<(), PlanningServiceError> {
        self.repo.delete_planning(id)?;
        info!("event=planning_delete module=service status=ok planning_id={id}");
        Ok(())
    }
}
