//! Fuzzy query execution against the search index.
//!
//! Scoring is distance-like: 0.0 is a perfect match, 1.0 is no match.
//! Each query token scores against a field by substring containment or, for
//! typo tolerance, the best Jaro-Winkler similarity against the field's
//! tokens. Field scores combine into one relevance score as a weighted
//! geometric product (title > snippet > status), so a perfect title match
//! dominates regardless of the other fields.

use super::index::SearchIndex;
use crate::types::DocumentKind;
use rapidfuzz::distance::jaro_winkler;
use serde::Serialize;

/// Maximum number of results returned per query.
const MAX_RESULTS: usize = 10;

/// Results scoring at or above this cutoff are dropped.
const SCORE_CUTOFF: f64 = 0.6;

/// Field weights; they sum to 1 so the combined score stays in [0, 1].
const TITLE_WEIGHT: f64 = 0.6;
const SNIPPET_WEIGHT: f64 = 0.3;
const STATUS_WEIGHT: f64 = 0.1;

/// Floor for a perfect field match, so the geometric combination never
/// collapses to exactly zero and field weights keep their ordering effect.
const MIN_FIELD_SCORE: f64 = 1e-3;

/// Minimum Jaro-Winkler similarity for a token to count as a fuzzy match.
/// Unrelated words routinely score 0.4-0.6 under Jaro-Winkler, so anything
/// below this is treated as no match at all.
const TOKEN_SIMILARITY_FLOOR: f64 = 0.75;

/// One ranked search hit. Lower `score` is more relevant.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub slug: String,
    pub title: String,
    pub snippet: String,
    pub kind: DocumentKind,
    pub status: Option<String>,
    pub score: f64,
}

impl SearchIndex {
    /// Execute a free-text query, returning at most 10 results sorted by
    /// ascending relevance score. Ties break by corpus order.
    ///
    /// An empty or whitespace-only query returns an empty vec, not an error.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let tokens: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let title = field_score(&entry.title, &tokens);
                let snippet = field_score(&entry.snippet, &tokens);
                let status = field_score(entry.status.as_deref().unwrap_or(""), &tokens);
                (idx, combine(title, snippet, status))
            })
            .filter(|(_, score)| *score < SCORE_CUTOFF)
            .collect();

        scored.sort_by(|(idx_a, a), (idx_b, b)| a.total_cmp(b).then(idx_a.cmp(idx_b)));
        scored.truncate(MAX_RESULTS);

        tracing::debug!("Query '{}' matched {} documents", query, scored.len());

        scored
            .into_iter()
            .map(|(idx, score)| {
                let entry = &self.entries()[idx];
                SearchResult {
                    slug: entry.slug.clone(),
                    title: entry.title.clone(),
                    snippet: entry.snippet.clone(),
                    kind: entry.kind,
                    status: entry.status.clone(),
                    score,
                }
            })
            .collect()
    }
}

/// Score one field against the query tokens. 0.0 = every token matches
/// exactly, 1.0 = nothing matches at all.
fn field_score(field: &str, tokens: &[String]) -> f64 {
    if field.is_empty() {
        return 1.0;
    }
    let lower = field.to_lowercase();
    let field_tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let total: f64 = tokens
        .iter()
        .map(|token| {
            if lower.contains(token.as_str()) {
                return 0.0;
            }
            let best = field_tokens
                .iter()
                .map(|ft| jaro_winkler::similarity(token.chars(), ft.chars()))
                .fold(0.0, f64::max);
            if best >= TOKEN_SIMILARITY_FLOOR {
                1.0 - best
            } else {
                1.0
            }
        })
        .sum();

    total / tokens.len() as f64
}

/// Combine per-field scores into one relevance value using normalized
/// weights: `Π field^weight`, with each field clamped to [1e-3, 1].
fn combine(title: f64, snippet: f64, status: f64) -> f64 {
    clamp(title).powf(TITLE_WEIGHT)
        * clamp(snippet).powf(SNIPPET_WEIGHT)
        * clamp(status).powf(STATUS_WEIGHT)
}

fn clamp(score: f64) -> f64 {
    score.clamp(MIN_FIELD_SCORE, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;
    use assert2::check;
    use rstest::rstest;

    fn corpus() -> Vec<Document> {
        let mut jwt = Document::new("jwt-auth-failure", "JWT Authentication Failure", DocumentKind::Note);
        jwt.body = "Token validation kept rejecting valid sessions".to_string();
        jwt.status = Some("failure".to_string());

        let mut deploy = Document::new("deploy-pipeline", "Deploy Pipeline Cleanup", DocumentKind::Note);
        deploy.body = "Refactored the JWT helper mentioned in passing".to_string();
        deploy.status = Some("success".to_string());

        let mut garden = Document::new("garden-notes", "Garden Irrigation", DocumentKind::Trail);
        garden.body = "Drip lines and watering schedule".to_string();

        vec![jwt, deploy, garden]
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn whitespace_query_returns_empty(#[case] query: &str) {
        let index = SearchIndex::build(&corpus());
        check!(index.search(query).is_empty());
    }

    #[test]
    fn empty_corpus_returns_empty() {
        let index = SearchIndex::build(&[]);
        check!(index.search("anything").is_empty());
    }

    #[test]
    fn title_match_ranks_above_snippet_match() {
        let index = SearchIndex::build(&corpus());
        let results = index.search("JWT failure");
        check!(!results.is_empty());
        check!(results[0].slug == "jwt-auth-failure");
    }

    #[test]
    fn unrelated_documents_are_filtered_out() {
        let index = SearchIndex::build(&corpus());
        let results = index.search("JWT");
        check!(results.iter().all(|r| r.slug != "garden-notes"));
    }

    #[test]
    fn tolerates_misspellings() {
        let index = SearchIndex::build(&corpus());
        let results = index.search("athentication failre");
        check!(!results.is_empty());
        check!(results[0].slug == "jwt-auth-failure");
    }

    #[test]
    fn tolerates_partial_words() {
        let index = SearchIndex::build(&corpus());
        let results = index.search("auth");
        check!(results.iter().any(|r| r.slug == "jwt-auth-failure"));
    }

    #[test]
    fn scores_ascend_and_cap_at_ten() {
        let docs: Vec<Document> = (0..15)
            .map(|i| {
                let mut doc = Document::new(
                    format!("note-{i}"),
                    format!("Deploy retrospective {i}"),
                    DocumentKind::Note,
                );
                doc.body = "deploy".to_string();
                doc
            })
            .collect();
        let index = SearchIndex::build(&docs);
        let results = index.search("deploy");
        check!(results.len() == 10);
        for pair in results.windows(2) {
            check!(pair[0].score <= pair[1].score);
        }
        // Equal scores fall back to corpus order.
        check!(results[0].slug == "note-0");
    }
}
