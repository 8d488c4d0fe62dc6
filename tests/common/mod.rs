//! Shared test fixtures: an on-disk knowledge base seeded with a small,
//! realistic corpus of trails and field notes.

use nexus_mcp::content::ContentStore;
use rstest::fixture;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary content directory plus the store pointing at it.
pub struct TestKnowledgeBase {
    pub store: Arc<ContentStore>,
    tmp: TempDir,
}

impl TestKnowledgeBase {
    /// Create an empty knowledge base (both subdirectories present, no docs).
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(tmp.path().join("trails")).unwrap();
        fs::create_dir(tmp.path().join("field-notes")).unwrap();
        let store = Arc::new(ContentStore::with_root(tmp.path().to_path_buf()));
        Self { store, tmp }
    }

    /// Create a knowledge base seeded with the standard test corpus.
    pub fn seeded() -> Self {
        let kb = Self::empty();
        kb.write_trail(
            "rust-learning",
            "---\ntitle: Rust Learning Path\nstatus: active\ndescription: Working through ownership and async with #rust #learning exercises\n---\n\n# Rust Learning\n\nLong-form notes on the borrow checker.\n",
        );
        kb.write_trail(
            "home-lab",
            "---\ntitle: Home Lab Setup\nstatus: archived\n---\n\nRack layout and #networking diagrams, nothing else.\n",
        );
        kb.write_note(
            "2026-08-18-jwt",
            "---\ntitle: JWT Authentication Failure\ndate: \"2026-08-18\"\nstatus: failure\n---\n\nToken validation rejected valid sessions. Tagged #auth #security.\n",
        );
        kb.write_note(
            "2026-08-19-deploy",
            "---\ntitle: Deploy Pipeline Hardened\ndate: \"2026-08-19\"\nstatus: success\n---\n\nFollow-up to 2026-08-18-jwt incident. Rotated keys, tagged #auth #deploy.\n",
        );
        kb.write_note(
            "2026-08-20-disk",
            "---\ntitle: Disk Usage Warning\ndate: \"2026-08-20\"\nstatus: warning\n---\n\nBackup volume at 85 percent. Tagged #networking.\n",
        );
        kb
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn write_trail(&self, slug: &str, contents: &str) -> PathBuf {
        let path = self.tmp.path().join("trails").join(format!("{slug}.md"));
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_note(&self, slug: &str, contents: &str) -> PathBuf {
        let path = self.tmp.path().join("field-notes").join(format!("{slug}.md"));
        fs::write(&path, contents).unwrap();
        path
    }
}

#[fixture]
pub fn knowledge_base() -> TestKnowledgeBase {
    TestKnowledgeBase::seeded()
}

#[fixture]
pub fn empty_knowledge_base() -> TestKnowledgeBase {
    TestKnowledgeBase::empty()
}
