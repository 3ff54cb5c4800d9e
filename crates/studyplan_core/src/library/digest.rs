//! Course digest: regroups course lines into three revision buckets.
//!
//! Lines switch the active bucket by keyword; headings and substantial
//! prose lines are collected into the active bucket, then rendered as a
//! short bullet sheet.

use once_cell::sync::Lazy;
use regex::Regex;

const CONCEPTS_HEADING: &str = "📚 CONCEPTS CLÉS";
const APPLICATIONS_HEADING: &str = "🎯 APPLICATIONS";
const REVIEW_HEADING: &str = "⚠️ À RÉVISER";
const CONCEPTS_LIMIT: usize = 10;
const APPLICATIONS_LIMIT: usize = 8;
const REVIEW_LIMIT: usize = 5;
const PROSE_MIN_CHARS_EXCLUSIVE: usize = 20;

static HEADING_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+\s*").expect("valid heading marker regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Concepts,
    Applications,
    Review,
}

#[derive(Debug, Default)]
struct Buckets {
    concepts: Vec<String>,
    applications: Vec<String>,
    review: Vec<String>,
}

impl Buckets {
    fn push(&mut self, bucket: Bucket, item: String) {
        match bucket {
            Bucket::Concepts => self.concepts.push(item),
            Bucket::Applications => self.applications.push(item),
            Bucket::Review => self.review.push(item),
        }
    }
}

/// Renders `content` as a concepts / applications / review bullet sheet.
///
/// Returns an empty string when no line qualifies.
pub fn digest_content(content: &str) -> String {
    let mut buckets = Buckets::default();
    let mut current = Bucket::Concepts;

    for line in content.split('\n').map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(bucket) = bucket_switch(line) {
            current = bucket;
        }

        if line.starts_with('#') {
            buckets.push(current, HEADING_MARKER_RE.replace(line, "").into_owned());
        } else if line.chars().count() > PROSE_MIN_CHARS_EXCLUSIVE
            && !line.starts_with('*')
            && !line.starts_with('-')
        {
            buckets.push(current, line.to_string());
        }
    }

    let mut rendered: Vec<String> = Vec::new();
    render_block(&mut rendered, CONCEPTS_HEADING, &buckets.concepts, CONCEPTS_LIMIT, true);
    render_block(
        &mut rendered,
        APPLICATIONS_HEADING,
        &buckets.applications,
        APPLICATIONS_LIMIT,
        true,
    );
    render_block(&mut rendered, REVIEW_HEADING, &buckets.review, REVIEW_LIMIT, false);
    rendered.join("\n")
}

fn bucket_switch(line: &str) -> Option<Bucket> {
    let lower = line.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

    if mentions(&["application", "exemple", "exercice"]) {
        Some(Bucket::Applications)
    } else if mentions(&["réviser", "revoir", "important"]) {
        Some(Bucket::Review)
    } else if mentions(&["définition", "concept", "propriété"]) {
        Some(Bucket::Concepts)
    } else {
        None
    }
}

fn render_block(
    rendered: &mut Vec<String>,
    heading: &str,
    items: &[String],
    limit: usize,
    trailing_blank: bool,
) {
    if items.is_empty() {
        return;
    }
    rendered.push(heading.to_string());
    rendered.push(String::new());
    rendered.extend(items.iter().take(limit).map(|item| format!("• {item}")));
    if trailing_blank {
        rendered.push(String::new());
    }
}
