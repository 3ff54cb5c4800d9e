//! Course library model.
//!
//! # Responsibility
//! - Describe the folder/course tree that feeds text into the planner.
//! - Carry attachment metadata (PDFs, images) without interpreting it.
//!
//! # Invariants
//! - Only `NodeKind::Course` nodes carry a `course` payload.
//! - PDF text is extracted upstream; an empty `extracted_text` is valid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CourseId = Uuid;
pub type LibraryNodeId = Uuid;

/// PDF attachment with its pre-extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfFile {
    pub id: Uuid,
    pub name: String,
    pub extracted_text: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Image attachment stored as a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    pub id: Uuid,
    pub name: String,
    pub data_url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Course leaf with free-form content and attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pdfs: Vec<PdfFile>,
    #[serde(default)]
    pub images: Vec<ImageFile>,
}

impl Course {
    /// Creates a course without attachments.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            pdfs: Vec::new(),
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Folder,
    Course,
}

/// One node of the library tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryNode {
    pub id: LibraryNodeId,
    pub name: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<LibraryNode>,
    /// Present only for course nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

impl LibraryNode {
    /// Creates an empty folder node.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: NodeKind::Folder,
            children: Vec::new(),
            course: None,
        }
    }

    /// Creates a course node named after its course title.
    pub fn course(course: Course) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: course.title.clone(),
            kind: NodeKind::Course,
            children: Vec::new(),
            course: Some(course),
        }
    }

    /// Appends a child and returns the node for chaining.
    pub fn with_child(mut self, child: LibraryNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Whole course library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub tree: Vec<LibraryNode>,
}
