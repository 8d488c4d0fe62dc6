//! Content loading and writing: the filesystem boundary around the core.
//!
//! The search and graph pipelines are pure functions of a `Vec<Document>`;
//! this module is the collaborator that produces that list from a content
//! directory (`<root>/trails`, `<root>/field-notes`) and appends new field
//! notes to it.

pub mod frontmatter;
pub mod store;
pub mod writer;

pub use frontmatter::{FrontMatter, split_front_matter};
pub use store::ContentStore;
pub use writer::{NewFieldNote, write_field_note};
