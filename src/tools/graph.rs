//! Knowledge graph handler: the full node/edge set as JSON for
//! force-directed rendering.

use crate::content::ContentStore;
use crate::graph::build_graph;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GraphRequest {}

/// Build the knowledge graph over the current corpus and serialize it.
pub async fn handle_graph(
    store: &Arc<ContentStore>,
    _request: GraphRequest,
) -> Result<String, String> {
    let documents = store.load().await.map_err(|e| e.to_string())?;
    let graph = build_graph(&documents);
    serde_json::to_string_pretty(&graph).map_err(|e| format!("Failed to serialize graph: {}", e))
}
