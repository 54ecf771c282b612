//! CreateProjectHandler - registers a new project.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProjectId, UserId};
use crate::domain::project::{Project, ProjectStatus, ProjectType};
use crate::ports::ProjectRepository;

/// Command to create a project.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub production_url: Option<String>,
    pub repository_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub extra_urls: Vec<String>,
}

/// Handler for project creation.
pub struct CreateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl CreateProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<Project, DomainError> {
        let project = Project::new(
            ProjectId::new(),
            cmd.user_id,
            cmd.name,
            cmd.description,
            cmd.status,
            cmd.project_type,
            cmd.production_url,
            cmd.repository_url,
            cmd.tech_stack,
            cmd.extra_urls,
        )?;

        self.projects.create(&project).await?;

        tracing::info!(project_id = %project.id(), "Project created");
        Ok(project)
    }
}
