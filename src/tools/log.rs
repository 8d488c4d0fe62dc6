//! Log-work handler: append a field note to the knowledge base.

use crate::content::{ContentStore, NewFieldNote, write_field_note};
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogWorkRequest {
    /// Brief title for the log entry (e.g., 'Fixed database connection issue')
    pub title: String,
    /// Detailed description of what was done, why, or lessons learned
    pub description: String,
    /// Status level: success, failure, warning, or info (default: success)
    #[serde(default)]
    pub status: Option<String>,
    /// Optional tags for categorization (e.g., ['database', 'bugfix'])
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Write a new field note and report where it landed.
pub async fn handle_log_work(
    store: &Arc<ContentStore>,
    request: LogWorkRequest,
) -> Result<String, String> {
    let root = store
        .root()
        .await
        .ok_or_else(|| "No content root configured; use set_content_root first".to_string())?;

    let mut note = NewFieldNote::new(request.title.clone(), request.description);
    if let Some(status) = request.status {
        note.status = status;
    }
    if let Some(tags) = request.tags {
        note.tags = tags;
    }

    let path = write_field_note(&root, note)
        .await
        .map_err(|e| format!("Failed to log field note: {}", e))?;

    Ok(format!(
        "Logged '{}' to {}\nThe note is immediately searchable via recall_knowledge.",
        request.title,
        path.display()
    ))
}
