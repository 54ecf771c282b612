//! PostgreSQL implementation of IdeaRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::db_error;
use crate::domain::foundation::{DomainError, ErrorCode, IdeaId, Timestamp, UserId};
use crate::domain::idea::Idea;
use crate::ports::IdeaRepository;

/// PostgreSQL-backed idea repository.
#[derive(Debug, Clone)]
pub struct PostgresIdeaRepository {
    pool: PgPool,
}

impl PostgresIdeaRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct IdeaRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

fn row_to_idea(row: IdeaRow) -> Idea {
    Idea::reconstitute(
        IdeaId::from_uuid(row.id),
        UserId::from_uuid(row.user_id),
        row.title,
        row.description,
        Timestamp::from_datetime(row.created_at),
    )
}

#[async_trait]
impl IdeaRepository for PostgresIdeaRepository {
    async fn create(&self, idea: &Idea) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ideas (id, user_id, title, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(idea.id().as_uuid())
        .bind(idea.user_id().as_uuid())
        .bind(idea.title())
        .bind(idea.description())
        .bind(idea.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Option<Idea>, DomainError> {
        let row = sqlx::query_as::<_, IdeaRow>(
            "SELECT id, user_id, title, description, created_at FROM ideas WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(row_to_idea))
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Idea>, DomainError> {
        let rows = sqlx::query_as::<_, IdeaRow>(
            r#"
            SELECT id, user_id, title, description, created_at
            FROM ideas
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(row_to_idea).collect())
    }

    async fn update(&self, idea: &Idea) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE ideas SET title = $1, description = $2 WHERE id = $3")
            .bind(idea.title())
            .bind(idea.description())
            .bind(idea.id().as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::IdeaNotFound,
                "Idea",
                idea.id(),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: IdeaId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ErrorCode::IdeaNotFound, "Idea", id));
        }
        Ok(())
    }
}
