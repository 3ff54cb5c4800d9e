//! Heuristic keyword extraction.
//!
//! Frequency ranking over cleaned lowercase tokens, followed by capitalized
//! words in text order. No stemming and no stop-word list.

use super::lines::char_len;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const MAX_KEYWORDS: usize = 8;
const TOP_FREQUENT_TERMS: usize = 10;
const MIN_TERM_CHARS_EXCLUSIVE: usize = 4;

static CAPITALIZED_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-ZÀÂÄÉÈÊËÏÎÔÙÛÜŸÇ][a-zàâäéèêëïîôùûüÿç]{3,}\b")
        .expect("valid capitalized word regex")
});

/// Returns up to `MAX_KEYWORDS` lowercase keywords for `text`.
///
/// Equal-frequency terms keep their first-seen order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let frequent = top_frequent_terms(text, TOP_FREQUENT_TERMS);
    let capitalized = CAPITALIZED_WORD_RE
        .find_iter(text)
        .map(|found| found.as_str().to_lowercase());

    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for term in frequent.into_iter().chain(capitalized) {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if !keywords.contains(&term) {
            keywords.push(term);
        }
    }
    keywords
}

fn top_frequent_terms(text: &str, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in text.split_whitespace() {
        let term = clean_token(token);
        if char_len(&term) <= MIN_TERM_CHARS_EXCLUSIVE {
            continue;
        }
        match positions.get(&term).copied() {
            Some(index) => counts[index].1 += 1,
            None => {
                positions.insert(term.clone(), counts.len());
                counts.push((term, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    counts.sort_by(|left, right| right.1.cmp(&left.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(term, _)| term)
        .collect()
}

fn clean_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|ch| is_keyword_letter(*ch))
        .collect()
}

fn is_keyword_letter(ch: char) -> bool {
    ch.is_ascii_lowercase() || "àâäéèêëïîôùûüÿç".contains(ch)
}

#[cfg(test)]
mod tests {
    use super::{clean_token, extract_keywords, top_frequent_terms};

    #[test]
    fn clean_token_keeps_french_letters_only() {
        assert_eq!(clean_token("(Propriété),"), "propriété");
        assert_eq!(clean_token("x²+y²"), "xy");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let terms = top_frequent_terms("gamma alpha gamma delta alpha omega", 10);
        assert_eq!(terms, vec!["gamma", "alpha", "delta", "omega"]);
    }

    #[test]
    fn short_words_are_ignored() {
        assert_eq!(extract_keywords("les uns et des autres"), vec!["autres"]);
    }

    #[test]
    fn capitalized_words_follow_frequent_terms() {
        let keywords = extract_keywords("Pythagore démontre triangle triangle");
        assert_eq!(keywords, vec!["triangle", "pythagore", "démontre"]);
    }
}
