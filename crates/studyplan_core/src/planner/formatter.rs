//! Flattens sections into indented outline lines.

use super::lines::char_len;
use super::segmenter::Section;
use super::summarizer::summarize;

/// Points at or below this length are dropped from the outline.
pub const POINT_MIN_CHARS_EXCLUSIVE: usize = 10;
pub const POINT_PREFIX: &str = "  • ";
pub const SUMMARY_PREFIX: &str = "    - ";

/// Emits title, then points, then summarized details for each section.
pub fn format_outline(sections: &[Section], keywords: &[String]) -> Vec<String> {
    let mut outline = Vec::new();

    for section in sections {
        outline.push(section.title.clone());

        outline.extend(
            section
                .points
                .iter()
                .filter(|point| char_len(point) > POINT_MIN_CHARS_EXCLUSIVE)
                .map(|point| format!("{POINT_PREFIX}{point}")),
        );

        outline.extend(
            section
                .details
                .iter()
                .filter_map(|detail| summarize(detail, keywords))
                .map(|summary| format!("{SUMMARY_PREFIX}{summary}")),
        );
    }

    outline
}
