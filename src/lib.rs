pub mod cli;
pub mod content;
pub mod error;
pub mod graph;
pub mod search;
pub mod server;
pub mod text;
pub mod tools;
pub mod tracing;
pub mod types;

pub use content::ContentStore;
pub use graph::{KnowledgeGraph, build_graph};
pub use search::{SearchIndex, SearchResult};
pub use types::{Document, DocumentKind};
