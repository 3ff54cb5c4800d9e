//! Line preparation and shared text helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[#*\-•0-9+.)]+\s*").expect("valid leading marker regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Splits raw text into trimmed, non-empty lines.
///
/// Any newline convention is accepted: trimming removes the `\r` of CRLF.
pub fn prepare_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips bullet/heading markers and normalizes whitespace.
pub fn clean_line(line: &str) -> String {
    let without_marker = LEADING_MARKER_RE.replace(line, "");
    let collapsed = WHITESPACE_RE.replace_all(&without_marker, " ");
    collapsed.trim().to_string()
}

/// Length in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Keeps at most `max_chars` characters.
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
