//! Local filesystem document store.
//!
//! Stores requirements documents as markdown files under a base directory,
//! one file per project. Writes go to a temp file first and are renamed into
//! place so a crash mid-write never leaves a truncated document.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::foundation::ProjectId;
use crate::ports::{DocumentStore, StoreError};

/// Filesystem implementation of the DocumentStore port.
///
/// # Layout
///
/// ```text
/// {base_path}/
/// ├── 550e8400-e29b-41d4-a716-446655440000.md
/// └── 6ba7b810-9dad-11d1-80b4-00c04fd430c8.md
/// ```
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    base_path: PathBuf,
}

impl LocalDocumentStore {
    /// Creates a store rooted at the given directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn document_path(&self, project_id: ProjectId) -> PathBuf {
        self.base_path.join(format!("{}.md", project_id))
    }

    fn temp_path(&self, project_id: ProjectId) -> PathBuf {
        self.base_path.join(format!("{}.md.tmp", project_id))
    }

    async fn ensure_base_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StoreError::Unavailable(format!(
                "Failed to create storage directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    /// Writes content atomically via temp file and rename.
    async fn write_atomic(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        self.ensure_base_dir().await?;

        let temp = self.temp_path(project_id);
        let target = self.document_path(project_id);

        let mut file = fs::File::create(&temp)
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to create temp file: {}", e)))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to write document: {}", e)))?;
        file.sync_all()
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to sync document: {}", e)))?;

        fs::rename(&temp, &target)
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to finalize document: {}", e)))
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn download(&self, project_id: ProjectId) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.document_path(project_id)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Unexpected(format!(
                "Failed to read document: {}",
                e
            ))),
        }
    }

    async fn upload(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        if fs::try_exists(self.document_path(project_id))
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to stat document: {}", e)))?
        {
            return Err(StoreError::Conflict(project_id));
        }
        self.write_atomic(project_id, content).await
    }

    async fn update(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        self.write_atomic(project_id, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, LocalDocumentStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalDocumentStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn download_returns_none_for_missing_document() {
        let (_dir, store) = store();
        assert!(store.download(ProjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upload_then_download_round_trips() {
        let (_dir, store) = store();
        let id = ProjectId::new();

        store.upload(id, "# Requirements\n").await.unwrap();

        assert_eq!(
            store.download(id).await.unwrap().as_deref(),
            Some("# Requirements\n")
        );
    }

    #[tokio::test]
    async fn upload_refuses_to_overwrite() {
        let (_dir, store) = store();
        let id = ProjectId::new();

        store.upload(id, "first").await.unwrap();
        let result = store.upload(id, "second").await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_upserts() {
        let (_dir, store) = store();
        let id = ProjectId::new();

        store.update(id, "created").await.unwrap();
        store.update(id, "replaced").await.unwrap();

        assert_eq!(
            store.download(id).await.unwrap().as_deref(),
            Some("replaced")
        );
    }

    #[tokio::test]
    async fn documents_are_isolated_by_project() {
        let (_dir, store) = store();
        let a = ProjectId::new();
        let b = ProjectId::new();

        store.upload(a, "doc a").await.unwrap();
        store.upload(b, "doc b").await.unwrap();

        assert_eq!(store.download(a).await.unwrap().as_deref(), Some("doc a"));
        assert_eq!(store.download(b).await.unwrap().as_deref(), Some("doc b"));
    }
}
