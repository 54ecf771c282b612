//! PostgreSQL implementation of ProjectRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use super::db_error;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, Timestamp, UserId};
use crate::domain::project::{Project, ProjectStatus, ProjectType};
use crate::ports::ProjectRepository;

/// PostgreSQL-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: String,
    status: String,
    project_type: String,
    production_url: Option<String>,
    repository_url: Option<String>,
    tech_stack: Vec<String>,
    extra_urls: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn row_to_project(row: ProjectRow) -> Result<Project, DomainError> {
    let status = ProjectStatus::from_str(&row.status).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid status: {}", e))
    })?;
    let project_type = ProjectType::from_str(&row.project_type).map_err(|e| {
        DomainError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid project type: {}", e),
        )
    })?;

    Ok(Project::reconstitute(
        ProjectId::from_uuid(row.id),
        UserId::from_uuid(row.user_id),
        row.name,
        row.description,
        status,
        project_type,
        row.production_url,
        row.repository_url,
        row.tech_stack,
        row.extra_urls,
        Timestamp::from_datetime(row.created_at),
        Timestamp::from_datetime(row.updated_at),
    ))
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn create(&self, project: &Project) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO projects (
                id, user_id, name, description, status, project_type,
                production_url, repository_url, tech_stack, extra_urls,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(project.user_id().as_uuid())
        .bind(project.name())
        .bind(project.description())
        .bind(project.status().as_str())
        .bind(project.project_type().as_str())
        .bind(project.production_url())
        .bind(project.repository_url())
        .bind(project.tech_stack())
        .bind(project.extra_urls())
        .bind(project.created_at().as_datetime())
        .bind(project.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, user_id, name, description, status, project_type,
                   production_url, repository_url, tech_stack, extra_urls,
                   created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_project).transpose()
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, user_id, name, description, status, project_type,
                   production_url, repository_url, tech_stack, extra_urls,
                   created_at, updated_at
            FROM projects
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_project).collect()
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = $1, description = $2, status = $3, project_type = $4,
                production_url = $5, repository_url = $6, tech_stack = $7,
                extra_urls = $8, updated_at = $9
            WHERE id = $10
            "#,
        )
        .bind(project.name())
        .bind(project.description())
        .bind(project.status().as_str())
        .bind(project.project_type().as_str())
        .bind(project.production_url())
        .bind(project.repository_url())
        .bind(project.tech_stack())
        .bind(project.extra_urls())
        .bind(project.updated_at().as_datetime())
        .bind(project.id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::ProjectNotFound,
                "Project",
                project.id(),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ErrorCode::ProjectNotFound, "Project", id));
        }
        Ok(())
    }
}
