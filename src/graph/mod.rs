//! Knowledge graph derivation for force-directed visualization.

pub mod builder;

pub use builder::build_graph;

use crate::types::DocumentKind;
use serde::Serialize;

/// One graph node per document.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    /// Globally unique id: `<kind>-<slug>`. Slugs are only unique within a
    /// kind, so the prefix keeps trail/note collisions apart.
    pub id: String,
    /// Display title.
    pub name: String,
    pub kind: DocumentKind,
    pub status: Option<String>,
    /// Browsing URL for the document.
    pub url: String,
    /// Layout group (1 = trails, 2 = field notes).
    pub group: u32,
    /// Render color derived from status.
    pub color: &'static str,
}

/// A weighted, undirected edge between two documents.
///
/// At most one edge exists per unordered node pair and never a self-loop;
/// a second contribution to the same pair strengthens the existing edge.
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// The full graph over the current document set.
///
/// Isolated nodes (no shared tags, no references) are valid output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}
