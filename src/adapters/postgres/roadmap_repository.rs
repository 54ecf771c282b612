//! PostgreSQL implementation of RoadmapRepository.
//!
//! Roadmaps, phases and items live in three tables joined by serial keys.
//! Fetching a roadmap hydrates the whole tree in two follow-up queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;

use super::db_error;
use crate::domain::foundation::{
    DomainError, ErrorCode, ItemId, PhaseId, RoadmapId, Timestamp, UserId,
};
use crate::domain::roadmap::{ItemStatus, LearningItem, LearningPhase, LearningRoadmap};
use crate::ports::{NewItem, NewPhase, RoadmapRepository};

/// PostgreSQL-backed roadmap repository.
#[derive(Debug, Clone)]
pub struct PostgresRoadmapRepository {
    pool: PgPool,
}

impl PostgresRoadmapRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads all phases of a roadmap with their items.
    async fn load_phases(&self, roadmap_id: RoadmapId) -> Result<Vec<LearningPhase>, DomainError> {
        let phase_rows = sqlx::query_as::<_, PhaseRow>(
            r#"
            SELECT id, roadmap_id, name, order_index, created_at
            FROM roadmap_phases
            WHERE roadmap_id = $1
            ORDER BY order_index
            "#,
        )
        .bind(roadmap_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        let item_rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT i.id, i.phase_id, i.name, i.status, i.order_index, i.created_at
            FROM phase_items i
            JOIN roadmap_phases p ON p.id = i.phase_id
            WHERE p.roadmap_id = $1
            ORDER BY i.order_index
            "#,
        )
        .bind(roadmap_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        let mut phases: Vec<LearningPhase> =
            phase_rows.into_iter().map(row_to_phase).collect();

        for item_row in item_rows {
            let item = row_to_item(item_row)?;
            if let Some(phase) = phases.iter_mut().find(|p| p.id == item.phase_id) {
                phase.items.push(item);
            }
        }

        Ok(phases)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RoadmapRow {
    id: i64,
    user_id: uuid::Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct PhaseRow {
    id: i64,
    roadmap_id: i64,
    name: String,
    order_index: i32,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    phase_id: i64,
    name: String,
    status: String,
    order_index: i32,
    created_at: DateTime<Utc>,
}

fn row_to_roadmap(row: RoadmapRow, phases: Vec<LearningPhase>) -> LearningRoadmap {
    LearningRoadmap::reconstitute(
        RoadmapId::from_raw(row.id),
        UserId::from_uuid(row.user_id),
        row.name,
        row.description,
        Timestamp::from_datetime(row.created_at),
        Timestamp::from_datetime(row.updated_at),
        phases,
    )
}

fn row_to_phase(row: PhaseRow) -> LearningPhase {
    LearningPhase {
        id: PhaseId::from_raw(row.id),
        roadmap_id: RoadmapId::from_raw(row.roadmap_id),
        name: row.name,
        order_index: row.order_index,
        created_at: Timestamp::from_datetime(row.created_at),
        items: Vec::new(),
    }
}

fn row_to_item(row: ItemRow) -> Result<LearningItem, DomainError> {
    let status = ItemStatus::from_str(&row.status).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid status: {}", e))
    })?;

    Ok(LearningItem {
        id: ItemId::from_raw(row.id),
        phase_id: PhaseId::from_raw(row.phase_id),
        name: row.name,
        status,
        order_index: row.order_index,
        created_at: Timestamp::from_datetime(row.created_at),
    })
}

#[async_trait]
impl RoadmapRepository for PostgresRoadmapRepository {
    async fn create(
        &self,
        user_id: UserId,
        name: String,
        description: Option<String>,
    ) -> Result<LearningRoadmap, DomainError> {
        let row = sqlx::query_as::<_, RoadmapRow>(
            r#"
            INSERT INTO learning_roadmaps (user_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, user_id, name, description, created_at, updated_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(&name)
        .bind(&description)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row_to_roadmap(row, Vec::new()))
    }

    async fn find_by_id(&self, id: RoadmapId) -> Result<Option<LearningRoadmap>, DomainError> {
        let row = sqlx::query_as::<_, RoadmapRow>(
            r#"
            SELECT id, user_id, name, description, created_at, updated_at
            FROM learning_roadmaps
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some(row) => {
                let phases = self.load_phases(id).await?;
                Ok(Some(row_to_roadmap(row, phases)))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<LearningRoadmap>, DomainError> {
        let rows = sqlx::query_as::<_, RoadmapRow>(
            r#"
            SELECT id, user_id, name, description, created_at, updated_at
            FROM learning_roadmaps
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| row_to_roadmap(row, Vec::new()))
            .collect())
    }

    async fn update(
        &self,
        id: RoadmapId,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE learning_roadmaps
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::RoadmapNotFound,
                "Roadmap",
                id,
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: RoadmapId) -> Result<(), DomainError> {
        // Phases and items cascade via foreign keys.
        let result = sqlx::query("DELETE FROM learning_roadmaps WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::RoadmapNotFound,
                "Roadmap",
                id,
            ));
        }
        Ok(())
    }

    async fn create_phase(&self, phase: NewPhase) -> Result<LearningPhase, DomainError> {
        let row = sqlx::query_as::<_, PhaseRow>(
            r#"
            INSERT INTO roadmap_phases (roadmap_id, name, order_index, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, roadmap_id, name, order_index, created_at
            "#,
        )
        .bind(phase.roadmap_id.as_i64())
        .bind(&phase.name)
        .bind(phase.order_index)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row_to_phase(row))
    }

    async fn update_phase(
        &self,
        id: PhaseId,
        name: Option<String>,
        order_index: Option<i32>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE roadmap_phases
            SET name = COALESCE($1, name),
                order_index = COALESCE($2, order_index)
            WHERE id = $3
            "#,
        )
        .bind(name)
        .bind(order_index)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::PhaseNotFound,
                "Phase",
                id,
            ));
        }
        Ok(())
    }

    async fn delete_phase(&self, id: PhaseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM roadmap_phases WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::PhaseNotFound,
                "Phase",
                id,
            ));
        }
        Ok(())
    }

    async fn create_item(&self, item: NewItem) -> Result<LearningItem, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO phase_items (phase_id, name, status, order_index, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, phase_id, name, status, order_index, created_at
            "#,
        )
        .bind(item.phase_id.as_i64())
        .bind(&item.name)
        .bind(item.status.as_str())
        .bind(item.order_index)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        row_to_item(row)
    }

    async fn update_item(
        &self,
        id: ItemId,
        name: Option<String>,
        status: Option<ItemStatus>,
        order_index: Option<i32>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE phase_items
            SET name = COALESCE($1, name),
                status = COALESCE($2, status),
                order_index = COALESCE($3, order_index)
            WHERE id = $4
            "#,
        )
        .bind(name)
        .bind(status.map(|s| s.as_str()))
        .bind(order_index)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ErrorCode::ItemNotFound, "Item", id));
        }
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM phase_items WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(ErrorCode::ItemNotFound, "Item", id));
        }
        Ok(())
    }
}
