//! Tag and cross-reference extraction from document text.
//!
//! Both extractors are deliberately coarse. Reference detection in
//! particular will over-match (any 4+ character lowercase word looks like a
//! slug) and under-match (anything with uppercase or characters outside
//! `[a-z0-9-]` is skipped). Downstream graph linking treats references as
//! low-confidence signals, so the permissive behavior is kept on purpose.

use ahash::AHashSet;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of reference candidates kept per document.
const MAX_REFERENCES: usize = 10;

/// Minimum length of a reference candidate.
const MIN_REFERENCE_LEN: usize = 4;

/// Common English words that look slug-shaped but never name a document.
const REFERENCE_STOP_WORDS: &[&str] = &[
    "about", "after", "also", "back", "been", "before", "being", "between", "could", "does",
    "down", "each", "even", "every", "first", "from", "have", "here", "into", "just", "like",
    "made", "many", "more", "most", "much", "note", "only", "other", "over", "same", "some",
    "such", "than", "that", "their", "them", "then", "there", "these", "they", "this", "time",
    "under", "using", "very", "want", "well", "were", "what", "when", "where", "which", "while",
    "will", "with", "without", "work", "would", "your",
];

/// Inline hashtag: `#` followed by word characters or hyphens.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([A-Za-z0-9_-]+)").expect("tag regex is a compile-time constant")
});

/// Slug shape: lowercase alphanumerics and interior hyphens.
static SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").expect("slug regex is a compile-time constant")
});

/// Extract the set of inline `#tags` from `text`.
///
/// The leading `#` is stripped and case is preserved as found; callers that
/// compare tags must pick one case policy (the graph builder lower-cases).
/// Duplicates collapse, order is irrelevant.
pub fn extract_tags(text: &str) -> AHashSet<String> {
    TAG.captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Extract candidate references to other documents' slugs from `text`.
///
/// Tokens are split on whitespace, stripped of surrounding brackets and
/// punctuation, then kept only if they are slug-shaped, longer than 3
/// characters, and not a stop word. The first 10 survivors are returned in
/// scan order.
pub fn extract_references(text: &str) -> Vec<String> {
    let mut refs = Vec::new();

    for raw in text.split_whitespace() {
        let token = raw.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-');
        if token.len() < MIN_REFERENCE_LEN {
            continue;
        }
        if !SLUG.is_match(token) {
            continue;
        }
        if REFERENCE_STOP_WORDS.contains(&token) {
            continue;
        }
        refs.push(token.to_string());
        if refs.len() == MAX_REFERENCES {
            break;
        }
    }

    refs
}
