//! PostgreSQL implementation of ConversationRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use super::db_error;
use crate::domain::conversation::{Conversation, ConversationMessage, MessageRole};
use crate::domain::foundation::{
    ConversationId, DomainError, ErrorCode, MessageId, Timestamp, UserId,
};
use crate::ports::ConversationRepository;

/// PostgreSQL-backed conversation repository.
#[derive(Debug, Clone)]
pub struct PostgresConversationRepository {
    pool: PgPool,
}

impl PostgresConversationRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ConversationRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    conversation_id: Uuid,
    role: String,
    content: String,
    token_count: i32,
    created_at: DateTime<Utc>,
}

fn row_to_conversation(row: ConversationRow) -> Conversation {
    Conversation::reconstitute(
        ConversationId::from_uuid(row.id),
        UserId::from_uuid(row.user_id),
        row.title,
        Timestamp::from_datetime(row.created_at),
        Timestamp::from_datetime(row.updated_at),
    )
}

fn row_to_message(row: MessageRow) -> Result<ConversationMessage, DomainError> {
    let role = MessageRole::from_str(&row.role).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid role: {}", e))
    })?;

    Ok(ConversationMessage::reconstitute(
        MessageId::from_uuid(row.id),
        ConversationId::from_uuid(row.conversation_id),
        role,
        row.content,
        row.token_count.max(0) as u32,
        Timestamp::from_datetime(row.created_at),
    ))
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn create(&self, conversation: &Conversation) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO conversations (id, user_id, title, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(conversation.id().as_uuid())
        .bind(conversation.user_id().as_uuid())
        .bind(conversation.title())
        .bind(conversation.created_at().as_datetime())
        .bind(conversation.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Conversation>, DomainError> {
        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM conversations
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(row_to_conversation).collect())
    }

    async fn delete(&self, id: ConversationId) -> Result<(), DomainError> {
        // Messages cascade via foreign key.
        let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::ConversationNotFound,
                "Conversation",
                id,
            ));
        }
        Ok(())
    }

    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<ConversationMessage>, DomainError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, conversation_id, role, content, token_count, created_at
            FROM conversation_messages
            WHERE conversation_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(conversation_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_message).collect()
    }

    async fn append_message(&self, message: &ConversationMessage) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            r#"
            INSERT INTO conversation_messages (
                id, conversation_id, role, content, token_count, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id().as_uuid())
        .bind(message.conversation_id().as_uuid())
        .bind(message.role().as_str())
        .bind(message.content())
        .bind(message.token_count() as i32)
        .bind(message.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        // Appending bumps the conversation so lists stay ordered by activity.
        sqlx::query("UPDATE conversations SET updated_at = NOW() WHERE id = $1")
            .bind(message.conversation_id().as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM conversation_messages WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(
                ErrorCode::ConversationNotFound,
                "Message",
                id,
            ));
        }
        Ok(())
    }
}
