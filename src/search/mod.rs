//! Fuzzy full-text search over the document corpus.
//!
//! The index is a fresh projection of the current document set; there is no
//! persistent index object or incremental update. Builds are cheap at
//! personal-knowledge-base scale, so callers rebuild per request.

pub mod index;
pub mod query;

pub use index::{SearchEntry, SearchIndex};
pub use query::SearchResult;
