//! Document store port - object storage for requirements documents.
//!
//! Documents live in a storage bucket as markdown objects keyed by project
//! ID with a fixed `.md` extension. The store knows nothing about document
//! structure; it moves opaque text.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ProjectId;

/// Errors from document storage operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No document stored under the key.
    #[error("No document stored for project {0}")]
    NotFound(ProjectId),

    /// Upload without overwrite hit an existing object.
    #[error("Document already exists for project {0}")]
    Conflict(ProjectId),

    /// The storage service rejected the request or was unreachable.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Anything else.
    #[error("Storage error: {0}")]
    Unexpected(String),
}

/// Port for requirements-document object storage.
///
/// # Contract
///
/// - Keys are derived from the project ID: `{project_id}.md`
/// - `upload` refuses to overwrite; `update` upserts. Last write wins;
///   there is no versioning or optimistic concurrency.
/// - Content is always a complete UTF-8 markdown document
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Downloads a project's document, `None` when nothing is stored yet.
    async fn download(&self, project_id: ProjectId) -> Result<Option<String>, StoreError>;

    /// Stores a new document. Fails with `Conflict` if one already exists.
    async fn upload(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError>;

    /// Stores a document, replacing any existing one.
    async fn update(&self, project_id: ProjectId, content: &str) -> Result<(), StoreError>;
}
