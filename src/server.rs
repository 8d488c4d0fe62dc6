//! MCP server implementation and session state.

use crate::content::ContentStore;
use crate::tools::graph::{GraphRequest, handle_graph};
use crate::tools::log::{LogWorkRequest, handle_log_work};
use crate::tools::recent::{AnalyzeRecentRequest, handle_analyze_recent};
use crate::tools::search::{RecallRequest, handle_recall};
use crate::tools::set_root::{SetContentRootRequest, handle_set_root};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for personal knowledge base queries.
#[derive(Clone)]
pub struct NexusServer {
    /// Shared content store (configured root, document loading)
    store: Arc<ContentStore>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for NexusServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NexusServer")
            .field("store", &self.store)
            .finish()
    }
}

#[tool_router]
impl NexusServer {
    /// Create a server, optionally pre-configured with a content root.
    pub fn new(root: Option<std::path::PathBuf>) -> Self {
        let store = match root {
            Some(root) => Arc::new(ContentStore::with_root(root)),
            None => Arc::new(ContentStore::new()),
        };
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared content store.
    pub fn store(&self) -> &Arc<ContentStore> {
        &self.store
    }

    #[tool(
        description = "Configure the knowledge base directory. Expects a path containing trails/ and field-notes/ subdirectories of markdown documents."
    )]
    async fn set_content_root(
        &self,
        Parameters(request): Parameters<SetContentRootRequest>,
    ) -> Result<String, String> {
        handle_set_root(&self.store, request).await
    }

    #[tool(
        description = "Search the personal knowledge base for past solutions, logs, or trails. Fuzzy matching over titles, snippets, and statuses; tolerates partial words and minor misspellings. Use this to find historical information about similar problems."
    )]
    async fn recall_knowledge(
        &self,
        Parameters(request): Parameters<RecallRequest>,
    ) -> Result<String, String> {
        handle_recall(&self.store, request).await
    }

    #[tool(
        description = "Get the knowledge graph over all documents as JSON: one node per document, edges weighted by shared tags and mutual references. Intended for force-directed visualization."
    )]
    async fn knowledge_graph(
        &self,
        Parameters(request): Parameters<GraphRequest>,
    ) -> Result<String, String> {
        handle_graph(&self.store, request).await
    }

    #[tool(
        description = "Log a completed task, failure, or insight as a field note for future reference. Creates a searchable record that agents can later retrieve."
    )]
    async fn log_work(
        &self,
        Parameters(request): Parameters<LogWorkRequest>,
    ) -> Result<String, String> {
        handle_log_work(&self.store, request).await
    }

    #[tool(
        description = "Summarize recent field notes with a success/failure/warning breakdown. Useful for reviewing recent history and spotting patterns."
    )]
    async fn analyze_recent(
        &self,
        Parameters(request): Parameters<AnalyzeRecentRequest>,
    ) -> Result<String, String> {
        handle_analyze_recent(&self.store, request).await
    }
}

#[tool_handler]
impl ServerHandler for NexusServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "nexus-mcp: a personal knowledge base of project trails and dated field notes. \
                 Use recall_knowledge before starting work to learn from past incidents, \
                 log_work to record outcomes, and knowledge_graph for the document link graph. \
                 Use set_content_root if the content directory was not configured at startup.",
            )
    }
}
