//! Project queries: get by ID and list by user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProjectId, UserId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// Handler for fetching a single project.
pub struct GetProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl GetProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        self.projects.find_by_id(id).await
    }
}

/// Handler for listing a user's projects.
pub struct ListProjectsHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl ListProjectsHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<Project>, DomainError> {
        self.projects.list(user_id).await
    }
}
