//! In-memory ConversationRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::conversation::{Conversation, ConversationMessage};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, MessageId, UserId};
use crate::ports::ConversationRepository;

/// HashMap-backed conversation repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
    messages: Arc<RwLock<HashMap<MessageId, ConversationMessage>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, conversation: &Conversation) -> Result<(), DomainError> {
        self.conversations
            .write()
            .unwrap()
            .insert(conversation.id(), conversation.clone());
        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Conversation>, DomainError> {
        let mut conversations: Vec<Conversation> = self
            .conversations
            .read()
            .unwrap()
            .values()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect();
        conversations.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(conversations)
    }

    async fn delete(&self, id: ConversationId) -> Result<(), DomainError> {
        if self.conversations.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(
                ErrorCode::ConversationNotFound,
                "Conversation",
                id,
            ));
        }
        self.messages
            .write()
            .unwrap()
            .retain(|_, m| m.conversation_id() != id);
        Ok(())
    }

    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<ConversationMessage>, DomainError> {
        let mut messages: Vec<ConversationMessage> = self
            .messages
            .read()
            .unwrap()
            .values()
            .filter(|m| m.conversation_id() == conversation_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(messages)
    }

    async fn append_message(&self, message: &ConversationMessage) -> Result<(), DomainError> {
        if !self
            .conversations
            .read()
            .unwrap()
            .contains_key(&message.conversation_id())
        {
            return Err(DomainError::not_found(
                ErrorCode::ConversationNotFound,
                "Conversation",
                message.conversation_id(),
            ));
        }
        self.messages
            .write()
            .unwrap()
            .insert(message.id(), message.clone());
        Ok(())
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), DomainError> {
        if self.messages.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(
                ErrorCode::ConversationNotFound,
                "Message",
                id,
            ));
        }
        Ok(())
    }
}
