//! In-memory ProjectRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, UserId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// HashMap-backed project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored projects.
    pub fn len(&self) -> usize {
        self.projects.read().unwrap().len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> Result<(), DomainError> {
        self.projects
            .write()
            .unwrap()
            .insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Project>, DomainError> {
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .unwrap()
            .values()
            .filter(|p| p.user_id() == user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(projects)
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().unwrap();
        if !projects.contains_key(&project.id()) {
            return Err(DomainError::not_found(
                ErrorCode::ProjectNotFound,
                "Project",
                project.id(),
            ));
        }
        projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> Result<(), DomainError> {
        if self.projects.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(
                ErrorCode::ProjectNotFound,
                "Project",
                id,
            ));
        }
        Ok(())
    }
}
