//! SaveDocumentHandler - persists a requirements document to object storage.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::ports::{DocumentStore, StoreError};

/// Handler for saving a requirements document.
///
/// `create` stores a brand-new document and surfaces a conflict if one
/// already exists; `save` upserts unconditionally (last write wins).
pub struct SaveDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl SaveDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, project_id: ProjectId, content: &str) -> Result<(), DomainError> {
        self.store
            .upload(project_id, content)
            .await
            .map_err(map_store_error)?;
        tracing::info!(project_id = %project_id, bytes = content.len(), "Document created");
        Ok(())
    }

    pub async fn save(&self, project_id: ProjectId, content: &str) -> Result<(), DomainError> {
        self.store
            .update(project_id, content)
            .await
            .map_err(map_store_error)?;
        tracing::info!(project_id = %project_id, bytes = content.len(), "Document saved");
        Ok(())
    }
}

fn map_store_error(err: StoreError) -> DomainError {
    let code = match &err {
        StoreError::NotFound(_) => ErrorCode::DocumentNotFound,
        StoreError::Conflict(_) => ErrorCode::SaveInFlight,
        _ => ErrorCode::StorageError,
    };
    DomainError::new(code, err.to_string())
}
