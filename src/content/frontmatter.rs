//! YAML front matter parsing for knowledge-base documents.

use serde::{Deserialize, Serialize};

/// Metadata block at the top of a document, delimited by `---` lines.
///
/// All fields are optional; unknown keys are ignored so hand-edited files
/// with extra metadata still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Split a raw file into its front matter and markdown body.
///
/// Returns `(None, text)` when there is no leading `---` block or it fails
/// to parse as YAML; a malformed block degrades to body text with a warning
/// rather than failing the load.
pub fn split_front_matter(text: &str) -> (Option<FrontMatter>, &str) {
    let Some(rest) = text.strip_prefix("---\n").or_else(|| text.strip_prefix("---\r\n")) else {
        return (None, text);
    };

    let Some(end) = rest.find("\n---") else {
        return (None, text);
    };
    let yaml = &rest[..end];
    // Skip past the closing delimiter and its line ending.
    let body_start = rest[end + 1..]
        .find('\n')
        .map_or(rest.len(), |nl| end + 1 + nl + 1);
    let body = &rest[body_start..];

    match serde_yaml::from_str::<FrontMatter>(yaml) {
        Ok(meta) => (Some(meta), body),
        Err(e) => {
            tracing::warn!("Skipping malformed front matter: {}", e);
            (None, text)
        }
    }
}
