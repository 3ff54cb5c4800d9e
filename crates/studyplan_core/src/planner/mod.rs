//! Raw-text to revision-plan transformer.
//!
//! # Responsibility
//! - Segment free-form course text into titled sections.
//! - Extract keywords, summarize long passages and build an outline.
//! - Distribute the outline over a fixed seven-day template.
//!
//! # Invariants
//! - The transformer never fails; degenerate input yields template-only days.
//! - No I/O and no shared mutable state: concurrent calls are independent.
//! - Keywords are computed from the raw text, not the prepared lines.

pub mod chapter;
pub mod formatter;
pub mod keywords;
pub mod lines;
pub mod schedule;
pub mod segmenter;
pub mod summarizer;

use crate::model::planning::Planning;
use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

pub use chapter::{detect_chapter_name, resolve_chapter_name, DEFAULT_CHAPTER_NAME};
pub use formatter::format_outline;
pub use keywords::extract_keywords;
pub use lines::{clean_line, prepare_lines};
pub use schedule::{generate_days, DayTemplate, DAY_TEMPLATES, MAX_TASKS_PER_DAY};
pub use segmenter::{is_section_title, segment, Section};
pub use summarizer::summarize;

/// Builds a planning from `raw_text`, created now.
pub fn transform(raw_text: &str, chapter_name: Option<&str>) -> Planning {
    transform_at(raw_text, chapter_name, Utc::now())
}

/// Builds a planning from `raw_text` with an explicit creation instant.
///
/// Day `n` is dated `created_at + (n - 1)` days.
pub fn transform_at(
    raw_text: &str,
    chapter_name: Option<&str>,
    created_at: DateTime<Utc>,
) -> Planning {
    let lines = prepare_lines(raw_text);
    let sections = segment(&lines);
    let keywords = extract_keywords(raw_text);
    let outline = format_outline(&sections, &keywords);
    let chapter_name = resolve_chapter_name(&lines, chapter_name);
    let days = generate_days(&outline, created_at);

    debug!(
        "event=planning_transform module=planner status=ok lines={} sections={} keywords={} outline_lines={}",
        lines.len(),
        sections.len(),
        keywords.len(),
        outline.len()
    );

    Planning {
        id: Uuid::now_v7(),
        chapter_id: Uuid::now_v7(),
        chapter_name,
        days,
        linked_course_ids: Vec::new(),
        linked_images: Vec::new(),
        created_at,
    }
}
