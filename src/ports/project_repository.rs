//! Project repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId, UserId};
use crate::domain::project::Project;

/// Port for project persistence.
///
/// `list` returns projects ordered by `updated_at` descending (most recently
/// touched first), matching the dashboard's display order.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persists a new project.
    async fn create(&self, project: &Project) -> Result<(), DomainError>;

    /// Finds a project by ID.
    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, DomainError>;

    /// Lists a user's projects, most recently updated first.
    async fn list(&self, user_id: UserId) -> Result<Vec<Project>, DomainError>;

    /// Persists changes to an existing project.
    ///
    /// Returns `ProjectNotFound` if the project does not exist.
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Deletes a project.
    ///
    /// Returns `ProjectNotFound` if the project does not exist.
    async fn delete(&self, id: ProjectId) -> Result<(), DomainError>;
}
