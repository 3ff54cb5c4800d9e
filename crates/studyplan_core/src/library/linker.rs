//! Course lookups and planner input assembly over the library tree.
//!
//! All traversals are depth-first pre-order over `LibraryNode::children`.

use crate::model::library::{Course, CourseId, ImageFile, LibraryNode, LibraryNodeId, NodeKind};

/// Collects every course under the node `folder_id`, the node included.
///
/// Returns an empty list when no node has that id.
pub fn courses_in_folder(folder_id: LibraryNodeId, tree: &[LibraryNode]) -> Vec<Course> {
    let mut courses = Vec::new();
    if let Some(node) = find_node(folder_id, tree) {
        collect_courses(node, &mut courses);
    }
    courses
}

/// Collects every course of the tree.
pub fn all_courses(tree: &[LibraryNode]) -> Vec<Course> {
    let mut courses = Vec::new();
    for node in tree {
        collect_courses(node, &mut courses);
    }
    courses
}

/// Collects folders reachable through folders only.
pub fn all_folders(tree: &[LibraryNode]) -> Vec<&LibraryNode> {
    let mut folders = Vec::new();
    collect_folders(tree, &mut folders);
    folders
}

/// Finds the first course with `course_id`.
pub fn find_course(course_id: CourseId, tree: &[LibraryNode]) -> Option<&Course> {
    for node in tree {
        if node.kind == NodeKind::Course {
            if let Some(course) = node.course.as_ref().filter(|course| course.id == course_id) {
                return Some(course);
            }
        }
        if let Some(found) = find_course(course_id, &node.children) {
            return Some(found);
        }
    }
    None
}

/// Concatenates course titles, contents and PDF texts into planner input.
pub fn extract_text(courses: &[Course]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for course in courses {
        parts.push(format!("=== {} ===\n", course.title));
        if !course.content.is_empty() {
            parts.push(course.content.clone());
        }

        for pdf in &course.pdfs {
            if !pdf.extracted_text.is_empty() {
                parts.push(format!("\n--- {} ---\n", pdf.name));
                parts.push(pdf.extracted_text.clone());
            }
        }

        parts.push("\n\n".to_string());
    }

    parts.join("\n")
}

/// Concatenates the images of every course, in course order.
pub fn extract_images(courses: &[Course]) -> Vec<ImageFile> {
    courses
        .iter()
        .flat_map(|course| course.images.iter().cloned())
        .collect()
}

fn find_node(node_id: LibraryNodeId, tree: &[LibraryNode]) -> Option<&LibraryNode> {
    for node in tree {
        if node.id == node_id {
            return Some(node);
        }
        if let Some(found) = find_node(node_id, &node.children) {
            return Some(found);
        }
    }
    None
}

fn collect_folders<'a>(nodes: &'a [LibraryNode], folders: &mut Vec<&'a LibraryNode>) {
    for node in nodes {
        if node.kind == NodeKind::Folder {
            folders.push(node);
            collect_folders(&node.children, folders);
        }
    }
}

fn collect_courses(node: &LibraryNode, courses: &mut Vec<Course>) {
    if node.kind == NodeKind::Course {
        if let Some(course) = &node.course {
            courses.push(course.clone());
        }
    }
    for child in &node.children {
        collect_courses(child, courses);
    }
}
