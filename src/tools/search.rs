//! Fuzzy search handler: recall past knowledge for a free-text query.

use crate::content::ContentStore;
use crate::search::{SearchIndex, SearchResult};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecallRequest {
    /// Natural language search query about past work, errors, or solutions
    pub query: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute a fuzzy search over the knowledge base and format the hits for
/// an agent to read.
pub async fn handle_recall(
    store: &Arc<ContentStore>,
    request: RecallRequest,
) -> Result<String, String> {
    let documents = store.load().await.map_err(|e| e.to_string())?;
    let index = SearchIndex::build(&documents);

    let mut results = index.search(&request.query);
    if let Some(limit) = request.limit {
        results.truncate(limit);
    }

    if results.is_empty() {
        let mut msg = format!("No historical information found for '{}'.\n\n", request.query);
        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search matches titles, snippets, and statuses\n");
        msg.push_str("• Minor misspellings are tolerated; exact paths are not needed\n");
        return Ok(msg);
    }

    Ok(format_results(&request.query, &results))
}

/// Render results in a compact, agent-friendly list.
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    let mut output = format!(
        "Found {} relevant item{} for '{}':\n\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    );

    for (idx, result) in results.iter().enumerate() {
        // Display confidence as a percentage; scores are distance-like.
        let confidence = ((1.0 - result.score) * 100.0).round() as u8;
        output
            .write_fmt(format_args!(
                "{}. [{}] {} ({}) - relevance: {}%\n",
                idx + 1,
                result.kind,
                result.title,
                result.status.as_deref().unwrap_or("unknown"),
                confidence
            ))
            .unwrap();
        if !result.snippet.is_empty() {
            output
                .write_fmt(format_args!("   {}\n", result.snippet))
                .unwrap();
        }
        output
            .write_fmt(format_args!("   slug: {}\n\n", result.slug))
            .unwrap();
    }

    output
}
