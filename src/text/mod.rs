//! Text processing: markdown stripping and tag/reference extraction.

pub mod extract;
pub mod normalize;

pub use extract::{extract_references, extract_tags};
pub use normalize::strip_markdown;
