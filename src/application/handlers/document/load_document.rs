//! LoadDocumentHandler - fetches a project's requirements document.

use std::sync::Arc;

use crate::domain::document::initial_template;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::ports::DocumentStore;

/// A loaded document, flagged when it came from the template fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub content: String,
    /// True when nothing was stored and the initial template was served.
    pub is_template: bool,
}

/// Handler for loading a requirements document.
///
/// When no document is stored yet, the editor still needs something to open,
/// so the dated initial template is returned instead of an error.
pub struct LoadDocumentHandler {
    store: Arc<dyn DocumentStore>,
}

impl LoadDocumentHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, project_id: ProjectId) -> Result<LoadedDocument, DomainError> {
        let stored = self
            .store
            .download(project_id)
            .await
            .map_err(|e| DomainError::new(ErrorCode::StorageError, e.to_string()))?;

        Ok(match stored {
            Some(content) => LoadedDocument {
                content,
                is_template: false,
            },
            None => LoadedDocument {
                content: initial_template(),
                is_template: true,
            },
        })
    }
}
