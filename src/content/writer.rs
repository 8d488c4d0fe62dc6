//! Field-note creation: the write side of the knowledge base.

use super::frontmatter::FrontMatter;
use crate::error::ContentError;
use crate::types::DocumentKind;
use ahash::AHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A field note to be appended to the knowledge base.
#[derive(Debug, Clone)]
pub struct NewFieldNote {
    pub title: String,
    pub body: String,
    /// success / failure / warning / info.
    pub status: String,
    pub tags: Vec<String>,
    /// Identifier for the agent or user writing the note.
    pub agent: String,
}

impl NewFieldNote {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            status: "success".to_string(),
            tags: Vec::new(),
            agent: "nexus-mcp".to_string(),
        }
    }
}

/// Write a new field note under `<root>/field-notes` and best-effort commit
/// it to git so it is immediately visible to other checkouts.
///
/// The filename is `YYYY-MM-DD-<hash8>.md`; the hash keeps same-day notes
/// from colliding. A failed git commit logs a warning, the file stays.
pub async fn write_field_note(root: &Path, note: NewFieldNote) -> Result<PathBuf, ContentError> {
    let now = chrono::Local::now();
    let date = now.format("%Y-%m-%d").to_string();
    let slug = format!("{}-{}", date, short_hash(&note.title, now.timestamp_nanos_opt()));

    let dir = root.join(DocumentKind::Note.directory());
    tokio::fs::create_dir_all(&dir).await.map_err(|source| ContentError::Io {
        action: "create",
        path: dir.clone(),
        source,
    })?;

    let meta = FrontMatter {
        title: Some(note.title.clone()),
        date: Some(date),
        status: Some(note.status),
        timestamp: Some(now.format("%Y-%m-%d %H:%M:%S").to_string()),
        agent: Some(note.agent),
        tags: note.tags,
        description: None,
    };
    // FrontMatter is a plain struct of options and a vec; serialization
    // cannot fail in practice, but degrade to an empty block if it does.
    let yaml = serde_yaml::to_string(&meta).unwrap_or_default();
    let contents = format!("---\n{}---\n\n{}\n", yaml, note.body);

    let path = dir.join(format!("{}.md", slug));
    tokio::fs::write(&path, contents).await.map_err(|source| ContentError::Io {
        action: "write",
        path: path.clone(),
        source,
    })?;

    tracing::info!("Logged field note {}", path.display());
    auto_commit(root, &path, &note.title).await;

    Ok(path)
}

fn short_hash(title: &str, nanos: Option<i64>) -> String {
    let mut hasher = AHasher::default();
    title.hash(&mut hasher);
    nanos.hash(&mut hasher);
    format!("{:08x}", hasher.finish() as u32)
}

/// Best-effort `git add` + `git commit` for the new note.
async fn auto_commit(root: &Path, path: &Path, title: &str) {
    let add = tokio::process::Command::new("git")
        .current_dir(root)
        .arg("add")
        .arg(path)
        .output()
        .await;

    match add {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            tracing::warn!(
                "git add failed (file still saved): {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return;
        }
        Err(e) => {
            tracing::warn!("git not available (file still saved): {}", e);
            return;
        }
    }

    let commit = tokio::process::Command::new("git")
        .current_dir(root)
        .args(["commit", "-m"])
        .arg(format!("Nexus log: {}", title))
        .output()
        .await;

    match commit {
        Ok(output) if output.status.success() => {
            tracing::info!("Committed field note: {}", title);
        }
        Ok(output) => tracing::warn!(
            "git commit failed (file still saved): {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        Err(e) => tracing::warn!("git commit failed (file still saved): {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::load_documents;
    use assert2::check;
    use tempfile::TempDir;

    #[tokio::test]
    async fn written_note_round_trips_through_the_loader() {
        let tmp = TempDir::new().unwrap();
        let mut note = NewFieldNote::new("Fixed flaky deploy", "Pinned the runner image.");
        note.status = "failure".to_string();
        note.tags = vec!["deploy".to_string(), "ci".to_string()];

        let path = write_field_note(tmp.path(), note).await.unwrap();
        check!(path.exists());

        let docs = load_documents(tmp.path());
        check!(docs.len() == 1);
        check!(docs[0].title == "Fixed flaky deploy");
        check!(docs[0].status.as_deref() == Some("failure"));
        check!(docs[0].tags == vec!["deploy".to_string(), "ci".to_string()]);
        check!(docs[0].body.trim() == "Pinned the runner image.");
        check!(docs[0].date.is_some());
    }

    #[tokio::test]
    async fn same_day_notes_get_distinct_slugs() {
        let tmp = TempDir::new().unwrap();
        let a = write_field_note(tmp.path(), NewFieldNote::new("One", "a"))
            .await
            .unwrap();
        let b = write_field_note(tmp.path(), NewFieldNote::new("Two", "b"))
            .await
            .unwrap();
        check!(a != b);
    }
}
