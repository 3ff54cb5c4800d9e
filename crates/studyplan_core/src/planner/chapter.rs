//! Chapter-name detection from the first prepared lines.

use super::lines::char_len;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_CHAPTER_NAME: &str = "Nouveau chapitre";
const SCANNED_LINES: usize = 5;
const HEADING_MIN_CHARS_EXCLUSIVE: usize = 5;
const HEADING_MAX_CHARS_EXCLUSIVE: usize = 100;

static CHAPTER_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(chapitre|ch[0-9]|leçon|cours|partie)").expect("valid chapter regex")
});
static NUMBERED_DASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\s*[-–—]\s*").expect("valid numbered dash regex"));

/// Resolves the chapter name: explicit override, detected heading, first
/// line, then `DEFAULT_CHAPTER_NAME`.
///
/// A blank override counts as absent; any other override is kept verbatim.
pub fn resolve_chapter_name(lines: &[String], chapter_override: Option<&str>) -> String {
    if let Some(name) = chapter_override.filter(|name| !name.trim().is_empty()) {
        return name.to_string();
    }

    detect_chapter_name(lines).unwrap_or_else(|| DEFAULT_CHAPTER_NAME.to_string())
}

/// Finds a heading-like line among the first lines, falling back to the
/// first line when it is shorter than 100 characters.
pub fn detect_chapter_name(lines: &[String]) -> Option<String> {
    let heading = lines.iter().take(SCANNED_LINES).find(|line| {
        let len = char_len(line);
        len > HEADING_MIN_CHARS_EXCLUSIVE
            && len < HEADING_MAX_CHARS_EXCLUSIVE
            && looks_like_heading(line)
    });

    heading
        .or_else(|| {
            lines
                .first()
                .filter(|line| char_len(line) < HEADING_MAX_CHARS_EXCLUSIVE)
        })
        .cloned()
}

fn looks_like_heading(line: &str) -> bool {
    CHAPTER_KEYWORD_RE.is_match(line) || NUMBERED_DASH_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::{detect_chapter_name, resolve_chapter_name, DEFAULT_CHAPTER_NAME};

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn heading_keyword_is_case_insensitive() {
        let detected = detect_chapter_name(&lines(&["intro", "LEÇON 3 : les aires"]));
        assert_eq!(detected.as_deref(), Some("LEÇON 3 : les aires"));
    }

    #[test]
    fn numbered_dash_heading_is_detected() {
        let detected = detect_chapter_name(&lines(&["texte libre", "12 — Géométrie"]));
        assert_eq!(detected.as_deref(), Some("12 — Géométrie"));
    }

    #[test]
    fn only_first_five_lines_are_scanned() {
        let detected =
            detect_chapter_name(&lines(&["un", "deux", "trois", "quatre", "cinq", "Chapitre 9"]));
        assert_eq!(detected.as_deref(), Some("un"));
    }

    #[test]
    fn long_first_line_falls_back_to_default() {
        let long = "x".repeat(120);
        assert_eq!(
            resolve_chapter_name(&lines(&[long.as_str()]), None),
            DEFAULT_CHAPTER_NAME
        );
    }

    #[test]
    fn blank_override_is_ignored() {
        let resolved = resolve_chapter_name(&lines(&["Chapitre 2 – Aires"]), Some("   "));
        assert_eq!(resolved, "Chapitre 2 – Aires");
    }

    #[test]
    fn padded_override_is_kept_verbatim() {
        let resolved = resolve_chapter_name(&lines(&["Chapitre 2 – Aires"]), Some("  Géo  "));
        assert_eq!(resolved, "  Géo  ");
    }
}
