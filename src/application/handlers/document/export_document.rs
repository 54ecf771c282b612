//! ExportDocumentHandler - prepares a document for download.

use std::sync::Arc;

use crate::domain::document::export_filename;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::ports::{DocumentStore, ProjectRepository};

/// Export payload: content plus the derived download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub filename: String,
    pub content: String,
}

/// Handler for exporting a project's requirements document.
pub struct ExportDocumentHandler {
    store: Arc<dyn DocumentStore>,
    projects: Arc<dyn ProjectRepository>,
}

impl ExportDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { store, projects }
    }

    pub async fn handle(&self, project_id: ProjectId) -> Result<ExportedDocument, DomainError> {
        let content = self
            .store
            .download(project_id)
            .await
            .map_err(|e| DomainError::new(ErrorCode::StorageError, e.to_string()))?
            .ok_or_else(|| {
                DomainError::not_found(ErrorCode::DocumentNotFound, "Document", project_id)
            })?;

        // Filename derives from the project name when the project still
        // exists; otherwise the generic fallback is used.
        let project = self.projects.find_by_id(project_id).await?;
        let filename = export_filename(project.as_ref().map(|p| p.name()));

        Ok(ExportedDocument { filename, content })
    }
}
