//! Core document types shared across search and graph derivation.

use serde::{Deserialize, Serialize};

/// The two kinds of documents in the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A longer-form project document with a completion status
    /// (active / archived / mastered).
    Trail,
    /// A dated, short incident/log document with a
    /// success / failure / warning status.
    Note,
}

impl DocumentKind {
    /// Prefix used to build globally unique graph node ids.
    ///
    /// Slugs are only unique within a kind, so node ids carry the kind.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Trail => "trail",
            Self::Note => "note",
        }
    }

    /// Render group for force-directed layout (trails cluster separately
    /// from field notes).
    pub const fn group(self) -> u32 {
        match self {
            Self::Trail => 1,
            Self::Note => 2,
        }
    }

    /// Directory name under the content root holding this kind.
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Trail => "trails",
            Self::Note => "field-notes",
        }
    }

    /// Browsing URL for a document of this kind.
    pub fn url(self, slug: &str) -> String {
        match self {
            Self::Trail => format!("/trails/{}", slug),
            Self::Note => format!("/field-notes/{}", slug),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A parsed knowledge-base document.
///
/// Owned by the content loader; immutable for the duration of one
/// index/graph build. The body is markdown with any leading front-matter
/// block already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Unique, URL-safe identifier (the file stem).
    pub slug: String,
    /// Display title (front matter, falling back to the slug).
    pub title: String,
    /// Markdown body without front matter.
    pub body: String,
    /// Optional short description from front matter (trails use this as
    /// their search snippet instead of the body).
    pub description: Option<String>,
    /// Trail or field note.
    pub kind: DocumentKind,
    /// Optional status tag (e.g. "success", "failure", "active").
    pub status: Option<String>,
    /// Optional ISO date from front matter (field notes are dated).
    pub date: Option<String>,
    /// Tags declared in front matter. Graph linking works on inline `#tags`
    /// extracted from text; these are carried for display and logging.
    pub tags: Vec<String>,
}

impl Document {
    /// Convenience constructor for tests and programmatic corpora.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            body: String::new(),
            description: None,
            kind,
            status: None,
            date: None,
            tags: Vec::new(),
        }
    }
}
