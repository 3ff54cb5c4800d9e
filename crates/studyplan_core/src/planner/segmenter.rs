//! Section segmentation of prepared lines.
//!
//! # Invariants
//! - Section order follows line order.
//! - Zero input lines produce zero sections.

use super::lines::{char_len, clean_line};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lines longer than this are stored as details, shorter ones as points.
pub const DETAIL_MIN_CHARS: usize = 80;
/// Title used when content appears before the first heading.
pub const IMPLICIT_SECTION_TITLE: &str = "Introduction";

const TITLE_MIN_CHARS: usize = 5;
const TITLE_MAX_CHARS: usize = 100;
const TITLE_MAX_WORDS: usize = 8;

static MARKDOWN_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+\s").expect("valid heading regex"));
static NUMBERED_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[.)]").expect("valid numbered heading regex"));

/// Titled run of consecutive source lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// Short lines, cleaned.
    pub points: Vec<String>,
    /// Lines longer than `DETAIL_MIN_CHARS`, cleaned.
    pub details: Vec<String>,
}

impl Section {
    fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: Vec::new(),
            details: Vec::new(),
        }
    }
}

/// Groups prepared lines into sections using heading heuristics.
pub fn segment(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in lines {
        if is_section_title(line) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(Section::titled(clean_line(line)));
            continue;
        }

        let section = current.get_or_insert_with(|| Section::titled(IMPLICIT_SECTION_TITLE));
        if char_len(line) > DETAIL_MIN_CHARS {
            section.details.push(clean_line(line));
        } else {
            section.points.push(clean_line(line));
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    sections
}

/// Returns whether a prepared line opens a new section.
pub fn is_section_title(line: &str) -> bool {
    let len = char_len(line);
    if len <= TITLE_MIN_CHARS || len >= TITLE_MAX_CHARS {
        return false;
    }

    MARKDOWN_HEADING_RE.is_match(line)
        || (starts_with_title_uppercase(line) && line.split_whitespace().count() <= TITLE_MAX_WORDS)
        || NUMBERED_HEADING_RE.is_match(line)
        || line.ends_with(':')
}

fn starts_with_title_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(is_title_uppercase)
}

/// Uppercase letters accepted at the start of a title or capitalized keyword.
pub(crate) fn is_title_uppercase(ch: char) -> bool {
    ch.is_ascii_uppercase() || "ÀÂÄÉÈÊËÏÎÔÙÛÜŸÇ".contains(ch)
}
