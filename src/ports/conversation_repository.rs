//! Conversation repository port.

use async_trait::async_trait;

use crate::domain::conversation::{Conversation, ConversationMessage};
use crate::domain::foundation::{ConversationId, DomainError, MessageId, UserId};

/// Port for AI conversation persistence.
///
/// Messages list in chronological order (`created_at` ascending).
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Persists a new conversation.
    async fn create(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Lists a user's conversations.
    async fn list(&self, user_id: UserId) -> Result<Vec<Conversation>, DomainError>;

    /// Deletes a conversation and its messages.
    async fn delete(&self, id: ConversationId) -> Result<(), DomainError>;

    /// Lists a conversation's messages, oldest first.
    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<ConversationMessage>, DomainError>;

    /// Appends a message to a conversation.
    async fn append_message(&self, message: &ConversationMessage) -> Result<(), DomainError>;

    /// Deletes a single message.
    async fn delete_message(&self, id: MessageId) -> Result<(), DomainError>;
}
