//! Content-root configuration handler.

use crate::content::ContentStore;
use crate::types::DocumentKind;
use rmcp::schemars;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetContentRootRequest {
    /// Path to the knowledge base directory (containing trails/ and field-notes/)
    pub path: String,
}

/// Point the store at a new content directory and report what it holds.
pub async fn handle_set_root(
    store: &Arc<ContentStore>,
    request: SetContentRootRequest,
) -> Result<String, String> {
    let expanded = expand_tilde(&request.path);
    let path = PathBuf::from(expanded.as_ref());
    let canonical = path
        .canonicalize()
        .map_err(|e| format!("Cannot resolve '{}': {}", request.path, e))?;

    store
        .set_root(canonical.clone())
        .await
        .map_err(|e| e.to_string())?;

    let documents = store.load().await.map_err(|e| e.to_string())?;
    let trails = documents
        .iter()
        .filter(|d| d.kind == DocumentKind::Trail)
        .count();
    let notes = documents.len() - trails;

    Ok(format!(
        "Content root set to {}\nLoaded {} trails and {} field notes.",
        canonical.display(),
        trails,
        notes
    ))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
