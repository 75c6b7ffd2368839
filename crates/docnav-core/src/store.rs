//! Access to the raw document collection.
//!
//! The search engine and the service only talk to [`DocumentStore`]. The default
//! implementation reads `<root>/<id>.md` files; [`MemoryStore`] keeps documents in
//! memory for embedding and tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::document::validate_doc_id;
use crate::{Error, Result};

const DOC_EXTENSION: &str = "md";

/// Source of raw document text.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All document ids, in a stable order.
    async fn list_ids(&self) -> Result<Vec<String>>;

    /// Raw text of one document. Missing documents are [`Error::NotFound`].
    async fn read(&self, id: &str) -> Result<String>;
}

/// Documents stored as `<root>/<id>.md` files.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a document file.
    pub fn doc_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{DOC_EXTENSION}"))
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn list_ids(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            Error::Storage(format!(
                "Failed to list documents in {}: {e}",
                self.root.display()
            ))
        })?;

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOC_EXTENSION) {
                continue;
            }
            // Only ids that `read` would accept take part in enumeration.
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_doc_id(stem).is_ok() && entry.file_type().await?.is_file() {
                    ids.push(stem.to_string());
                }
            }
        }

        ids.sort();
        debug!("found {} documents in {}", ids.len(), self.root.display());
        Ok(ids)
    }

    async fn read(&self, id: &str) -> Result<String> {
        validate_doc_id(id)?;
        let path = self.doc_path(id);
        debug!("reading {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::from_read(id, e))
    }
}

/// In-memory document collection, enumerated in id order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(id.into(), text.into());
    }

    /// Builder-style [`MemoryStore::insert`].
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_ids(&self) -> Result<Vec<String>> {
        Ok(self.docs.keys().cloned().collect())
    }

    async fn read(&self, id: &str) -> Result<String> {
        self.docs
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("document '{id}'")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) {
        std::fs::write(dir.path().join(name), text).expect("write fixture");
    }

    #[tokio::test]
    async fn test_fs_store_lists_markdown_ids_sorted() {
        let dir = TempDir::new().unwrap();
        write(&dir, "zeta.md", "# Z");
        write(&dir, "alpha.md", "# A");
        write(&dir, "notes.txt", "ignored");
        write(&dir, "bad-name.md", "ignored");
        std::fs::create_dir(dir.path().join("sub.md")).unwrap();

        let store = FsDocumentStore::new(dir.path());
        assert_eq!(store.list_ids().await.unwrap(), vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn test_fs_store_read_errors() {
        let dir = TempDir::new().unwrap();
        write(&dir, "intro.md", "# Intro\n");
        let store = FsDocumentStore::new(dir.path());

        assert_eq!(store.read("intro").await.unwrap(), "# Intro\n");
        assert!(matches!(store.read("missing").await, Err(Error::NotFound(_))));
        assert!(matches!(store.read("../intro").await, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_fs_store_missing_root_is_storage_error() {
        let store = FsDocumentStore::new("/definitely/not/here");
        assert!(matches!(store.list_ids().await, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new().with("b", "# B").with("a", "# A");
        assert_eq!(store.list_ids().await.unwrap(), vec!["a", "b"]);
        assert_eq!(store.read("a").await.unwrap(), "# A");
        assert!(matches!(store.read("c").await, Err(Error::NotFound(_))));
    }
}
