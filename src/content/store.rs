//! Shared content-store state and document loading.

use super::frontmatter::split_front_matter;
use crate::error::ContentError;
use crate::types::{Document, DocumentKind};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Shared handle to the configured content directory.
///
/// This is the coordination point tool handlers share, mirroring one content
/// root across concurrent requests. Documents are re-read on every load;
/// the derived index and graph are pure functions of that list, so no
/// further synchronization is needed.
#[derive(Debug, Default)]
pub struct ContentStore {
    root: RwLock<Option<PathBuf>>,
}

impl ContentStore {
    /// Create a store with no root configured yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pointing at `root`.
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            root: RwLock::new(Some(root)),
        }
    }

    /// Get the configured content root.
    pub async fn root(&self) -> Option<PathBuf> {
        self.root.read().await.clone()
    }

    /// Point the store at a new content root, validating it exists.
    pub async fn set_root(&self, root: PathBuf) -> Result<(), ContentError> {
        if !root.is_dir() {
            return Err(ContentError::InvalidRoot(root));
        }
        tracing::info!("Content root set to {}", root.display());
        *self.root.write().await = Some(root);
        Ok(())
    }

    /// Load the full document set from the configured root.
    pub async fn load(&self) -> Result<Vec<Document>, ContentError> {
        let root = self.root().await.ok_or(ContentError::NoRoot)?;
        Ok(load_documents(&root))
    }
}

/// Load every document under `<root>/trails` and `<root>/field-notes`.
///
/// A missing subdirectory contributes no documents; an unreadable or
/// malformed file is skipped with a warning. The result is sorted by
/// (kind, slug) so corpus order, and therefore search tie-breaking, is
/// deterministic across runs.
pub fn load_documents(root: &Path) -> Vec<Document> {
    let mut documents = Vec::new();
    for kind in [DocumentKind::Trail, DocumentKind::Note] {
        let dir = root.join(kind.directory());
        if !dir.is_dir() {
            tracing::debug!("No {} directory at {}", kind, dir.display());
            continue;
        }
        collect_documents(&dir, kind, &mut documents);
    }

    documents.sort_by(|a, b| (a.kind.group(), &a.slug).cmp(&(b.kind.group(), &b.slug)));
    tracing::debug!("Loaded {} documents from {}", documents.len(), root.display());
    documents
}

fn collect_documents(dir: &Path, kind: DocumentKind, documents: &mut Vec<Document>) {
    let walker = WalkBuilder::new(dir).max_depth(Some(1)).build();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        match read_document(path, kind) {
            Some(doc) => documents.push(doc),
            None => tracing::warn!("Skipping unreadable document {}", path.display()),
        }
    }
}

fn read_document(path: &Path, kind: DocumentKind) -> Option<Document> {
    let slug = path.file_stem()?.to_str()?.to_string();
    let raw = std::fs::read_to_string(path).ok()?;
    let (meta, body) = split_front_matter(&raw);
    let meta = meta.unwrap_or_default();

    Some(Document {
        title: meta.title.unwrap_or_else(|| slug.clone()),
        slug,
        body: body.to_string(),
        description: meta.description,
        kind,
        status: meta.status,
        date: meta.date,
        tags: meta.tags,
    })
}
