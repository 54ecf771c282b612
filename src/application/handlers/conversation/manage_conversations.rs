//! Conversation create/list/delete handlers.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, UserId};
use crate::ports::ConversationRepository;

/// Command to start a conversation.
#[derive(Debug, Clone)]
pub struct CreateConversationCommand {
    pub user_id: UserId,
    pub title: String,
}

/// Handlers for conversation lifecycle operations.
pub struct ConversationHandlers {
    conversations: Arc<dyn ConversationRepository>,
}

impl ConversationHandlers {
    pub fn new(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self { conversations }
    }

    pub async fn create(
        &self,
        cmd: CreateConversationCommand,
    ) -> Result<Conversation, DomainError> {
        let conversation = Conversation::new(ConversationId::new(), cmd.user_id, cmd.title)?;
        self.conversations.create(&conversation).await?;
        Ok(conversation)
    }

    pub async fn list(&self, user_id: UserId) -> Result<Vec<Conversation>, DomainError> {
        self.conversations.list(user_id).await
    }

    pub async fn delete(&self, id: ConversationId) -> Result<(), DomainError> {
        self.conversations.delete(id).await
    }
}
