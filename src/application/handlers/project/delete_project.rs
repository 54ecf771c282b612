//! DeleteProjectHandler - removes a project.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::ProjectRepository;

/// Handler for project deletion.
///
/// The requirements document in object storage is left behind; the store
/// key is derived from the project ID and becomes unreachable.
pub struct DeleteProjectHandler {
    projects: Arc<dyn ProjectRepository>,
}

impl DeleteProjectHandler {
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    pub async fn handle(&self, id: ProjectId) -> Result<(), DomainError> {
        self.projects.delete(id).await?;
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProjectRepository;
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::domain::project::{Project, ProjectStatus, ProjectType};
    use crate::ports::ProjectRepository as _;

    #[tokio::test]
    async fn deletes_existing_project() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let project = Project::new(
            ProjectId::new(),
            UserId::new(),
            "Doomed".to_string(),
            String::new(),
            ProjectStatus::Planning,
            ProjectType::Personal,
            None,
            None,
            vec![],
            vec![],
        )
        .unwrap();
        repo.create(&project).await.unwrap();

        DeleteProjectHandler::new(repo.clone())
            .handle(project.id())
            .await
            .unwrap();

        assert!(repo.find_by_id(project.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        let err = DeleteProjectHandler::new(repo)
            .handle(ProjectId::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }
}
