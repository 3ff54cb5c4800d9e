//! Keyword-anchored excerpt of one long line.

use super::lines::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a sentence chosen because it mentions a keyword.
pub const MATCHED_SUMMARY_MAX_CHARS: usize = 120;
/// Maximum length of every fallback excerpt.
pub const FALLBACK_SUMMARY_MAX_CHARS: usize = 100;

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence end regex"));

/// Reduces `text` to one short sentence, preferring keyword matches.
///
/// Returns `None` when the excerpt would be empty.
pub fn summarize(text: &str, keywords: &[String]) -> Option<String> {
    let sentences: Vec<&str> = SENTENCE_END_RE
        .split(text)
        .filter(|sentence| !sentence.trim().is_empty())
        .collect();

    let summary = match sentences.first() {
        None => truncate_chars(text, FALLBACK_SUMMARY_MAX_CHARS),
        Some(first) => sentences
            .iter()
            .find(|sentence| mentions_keyword(sentence, keywords))
            .map(|sentence| truncate_chars(sentence.trim(), MATCHED_SUMMARY_MAX_CHARS))
            .unwrap_or_else(|| truncate_chars(first.trim(), FALLBACK_SUMMARY_MAX_CHARS)),
    };

    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}

fn mentions_keyword(sentence: &str, keywords: &[String]) -> bool {
    let lower = sentence.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::summarize;

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn picks_first_sentence_mentioning_a_keyword() {
        let text = "Intro sans intérêt. Le THÉORÈME de Thalès s'applique ici! Suite.";
        let summary = summarize(text, &keywords(&["théorème"])).unwrap();
        assert_eq!(summary, "Le THÉORÈME de Thalès s'applique ici");
    }

    #[test]
    fn matched_sentence_is_capped_at_120_chars() {
        let sentence = format!("keyword {}", "a".repeat(200));
        let summary = summarize(&sentence, &keywords(&["keyword"])).unwrap();
        assert_eq!(summary.chars().count(), 120);
    }

    #[test]
    fn punctuation_only_text_falls_back_to_raw_prefix() {
        assert_eq!(summarize("?!...", &[]).as_deref(), Some("?!..."));
    }

    #[test]
    fn empty_text_has_no_summary() {
        assert_eq!(summarize("", &[]), None);
    }
}
