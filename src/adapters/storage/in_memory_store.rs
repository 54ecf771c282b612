//! In-memory document store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::ProjectId;
use crate::ports::{DocumentStore, StoreError};

/// In-memory implementation of the DocumentStore port.
///
/// Cloning shares the underlying map, so a test can hold a handle while
/// the application owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<ProjectId, String>>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document, replacing any existing one.
    pub fn seed(&self, project_id: ProjectId, content: impl Into<String>) {
        self.documents
            .write()
            .unwrap()
            .insert(project_id, content.into());
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.read().unwrap().is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn download(&self, project_id: ProjectId) -> Result<Option<String>, StoreError> {
        Ok(self.documents.read().unwrap().get(&project_id).cloned())
    }

    async fn upload(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.write().unwrap();
        if documents.contains_key(&project_id) {
            return Err(StoreError::Conflict(project_id));
        }
        documents.insert(project_id, content.to_string());
        Ok(())
    }

    async fn update(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError> {
        self.documents
            .write()
            .unwrap()
            .insert(project_id, content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn download_returns_none_for_missing_document() {
        let store = InMemoryDocumentStore::new();
        let result = store.download(ProjectId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn upload_then_download_round_trips() {
        let store = InMemoryDocumentStore::new();
        let id = ProjectId::new();

        store.upload(id, "# Doc").await.unwrap();

        assert_eq!(store.download(id).await.unwrap().as_deref(), Some("# Doc"));
    }

    #[tokio::test]
    async fn upload_refuses_to_overwrite() {
        let store = InMemoryDocumentStore::new();
        let id = ProjectId::new();

        store.upload(id, "first").await.unwrap();
        let result = store.upload(id, "second").await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.download(id).await.unwrap().as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn update_replaces_existing_content() {
        let store = InMemoryDocumentStore::new();
        let id = ProjectId::new();

        store.upload(id, "first").await.unwrap();
        store.update(id, "second").await.unwrap();

        assert_eq!(store.download(id).await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn update_creates_when_missing() {
        let store = InMemoryDocumentStore::new();
        let id = ProjectId::new();

        store.update(id, "fresh").await.unwrap();

        assert_eq!(store.download(id).await.unwrap().as_deref(), Some("fresh"));
    }
}
