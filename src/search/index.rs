//! Search index construction: projecting documents into searchable entries.

use crate::text::strip_markdown;
use crate::types::{Document, DocumentKind};
use serde::Serialize;

/// Maximum snippet length in characters before ellipsis truncation.
const SNIPPET_LENGTH: usize = 200;

/// The indexed projection of one document.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEntry {
    pub slug: String,
    pub title: String,
    /// Plain-text excerpt, at most 200 characters, ellipsis-truncated.
    pub snippet: String,
    pub kind: DocumentKind,
    pub status: Option<String>,
}

/// A weighted, fuzzy-searchable index over the full document set.
///
/// Entries keep corpus order so result ties break deterministically.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Build a fresh index from the current document set.
    ///
    /// An empty corpus yields an empty but valid index.
    pub fn build(documents: &[Document]) -> Self {
        let start = std::time::Instant::now();

        let entries = documents
            .iter()
            .map(|doc| SearchEntry {
                slug: doc.slug.clone(),
                title: doc.title.clone(),
                snippet: snippet_for(doc),
                kind: doc.kind,
                status: doc.status.clone(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Built search index: {} entries in {:?}",
            entries.len(),
            start.elapsed()
        );

        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the search snippet for a document.
///
/// Trails prefer their front-matter description; field notes (and trails
/// without one) use the normalized body. Front matter is already stripped
/// by the loader.
fn snippet_for(doc: &Document) -> String {
    let source = match &doc.description {
        Some(description) if !description.trim().is_empty() => description.clone(),
        _ => strip_markdown(&doc.body),
    };
    truncate_snippet(&source)
}

fn truncate_snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_LENGTH {
        return text.to_string();
    }
    let mut snippet: String = text.chars().take(SNIPPET_LENGTH).collect();
    snippet.push_str("...");
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn note(slug: &str, title: &str, body: &str) -> Document {
        Document {
            body: body.to_string(),
            ..Document::new(slug, title, DocumentKind::Note)
        }
    }

    #[test]
    fn empty_corpus_builds_empty_index() {
        let index = SearchIndex::build(&[]);
        check!(index.is_empty());
    }

    #[test]
    fn snippet_is_normalized_markdown() {
        let doc = note("a", "A", "## Section\n\nSome **bold** prose");
        let index = SearchIndex::build(&[doc]);
        check!(index.entries()[0].snippet == "Section Some bold prose");
    }

    #[test]
    fn long_snippet_is_ellipsis_truncated() {
        let doc = note("a", "A", &"word ".repeat(100));
        let index = SearchIndex::build(&[doc]);
        let snippet = &index.entries()[0].snippet;
        check!(snippet.chars().count() == 203);
        check!(snippet.ends_with("..."));
    }

    #[test]
    fn trail_description_wins_over_body() {
        let mut doc = Document::new("t", "Trail", DocumentKind::Trail);
        doc.description = Some("short summary".to_string());
        doc.body = "very long body that should not be used".to_string();
        let index = SearchIndex::build(&[doc]);
        check!(index.entries()[0].snippet == "short summary");
    }
}
