//! Recent-activity handler: a status breakdown of the latest field notes.

use crate::content::ContentStore;
use crate::types::{Document, DocumentKind};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeRecentRequest {
    /// Maximum number of field notes to include (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Focus on a specific status: success, failure, warning, or all (default: all)
    #[serde(default)]
    pub focus: Option<String>,
}

/// Summarize the most recent field notes, newest first.
pub async fn handle_analyze_recent(
    store: &Arc<ContentStore>,
    request: AnalyzeRecentRequest,
) -> Result<String, String> {
    let documents = store.load().await.map_err(|e| e.to_string())?;

    let focus = request.focus.as_deref().unwrap_or("all");
    let mut notes: Vec<&Document> = documents
        .iter()
        .filter(|doc| doc.kind == DocumentKind::Note)
        .filter(|doc| {
            focus == "all" || doc.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(focus))
        })
        .collect();

    // Newest first; undated notes sink to the end. ISO dates sort lexically.
    notes.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(da), Some(db)) => db.cmp(da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    notes.truncate(request.limit.unwrap_or(10));

    if notes.is_empty() {
        return Ok(format!("No recent field notes found (focus: {}).", focus));
    }

    let count_status = |status: &str| {
        notes
            .iter()
            .filter(|doc| doc.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(status)))
            .count()
    };

    let mut output = format!(
        "Recent activity ({} notes, focus: {}): {} success, {} failure, {} warning\n\n",
        notes.len(),
        focus,
        count_status("success"),
        count_status("failure"),
        count_status("warning"),
    );

    for note in &notes {
        output
            .write_fmt(format_args!(
                "• {} [{}] {} (slug: {})\n",
                note.date.as_deref().unwrap_or("undated"),
                note.status.as_deref().unwrap_or("unknown"),
                note.title,
                note.slug
            ))
            .unwrap();
    }

    Ok(output)
}
