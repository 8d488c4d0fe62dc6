//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for nexus-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when working with the content directory fails.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No content root has been configured yet.
    #[error("no content root configured; use set_content_root or pass --root")]
    NoRoot,

    /// The configured content root does not exist or is not a directory.
    #[error("content root is not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// Reading or writing a document file failed.
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
