//! Message list/append/delete handlers.

use std::sync::Arc;

use crate::domain::conversation::{ConversationMessage, MessageRole};
use crate::domain::foundation::{ConversationId, DomainError, MessageId};
use crate::ports::ConversationRepository;

/// Command to append a message to a conversation.
#[derive(Debug, Clone)]
pub struct AppendMessageCommand {
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub token_count: u32,
}

/// Handlers for conversation message operations.
pub struct MessageHandlers {
    conversations: Arc<dyn ConversationRepository>,
}

impl MessageHandlers {
    pub fn new(conversations: Arc<dyn ConversationRepository>) -> Self {
        Self { conversations }
    }

    pub async fn list(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<ConversationMessage>, DomainError> {
        self.conversations.list_messages(conversation_id).await
    }

    pub async fn append(
        &self,
        cmd: AppendMessageCommand,
    ) -> Result<ConversationMessage, DomainError> {
        let message = ConversationMessage::new(
            MessageId::new(),
            cmd.conversation_id,
            cmd.role,
            cmd.content,
            cmd.token_count,
        )?;
        self.conversations.append_message(&message).await?;
        Ok(message)
    }

    pub async fn delete(&self, id: MessageId) -> Result<(), DomainError> {
        self.conversations.delete_message(id).await
    }
}
