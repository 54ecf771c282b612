//! UpdateProjectHandler - applies partial changes to a project.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::domain::project::{Project, ProjectChanges};
use crate::ports::ProjectRepository;

/// Command to update a project.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectCommand {
    pub changes: ProjectChanges,
}

/// Handler for project updates.
pub struct UpdateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl UpdateProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(
        &self,
        id: ProjectId,
        cmd: UpdateProjectCommand,
    ) -> Result<Project, DomainError> {
        let mut project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::ProjectNotFound, "Project", id))?;

        project.update(cmd.changes)?;
        self.projects.update(&project).await?;

        Ok(project)
    }
}
