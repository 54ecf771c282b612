//! AI conversation and message entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ConversationId, DomainError, MessageId, Timestamp, UserId, ValidationError,
};

/// Maximum length for a conversation title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Database/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for MessageRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown message role '{}'", other),
            )),
        }
    }
}

/// A stored AI conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    user_id: UserId,
    title: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Creates a new conversation.
    pub fn new(id: ConversationId, user_id: UserId, title: String) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, title.len()).into());
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            title,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a conversation from persistence.
    pub fn reconstitute(
        id: ConversationId,
        user_id: UserId,
        title: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

/// A single message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    id: MessageId,
    conversation_id: ConversationId,
    role: MessageRole,
    content: String,
    token_count: u32,
    created_at: Timestamp,
}

impl ConversationMessage {
    /// Creates a new message.
    pub fn new(
        id: MessageId,
        conversation_id: ConversationId,
        role: MessageRole,
        content: String,
        token_count: u32,
    ) -> Result<Self, DomainError> {
        if content.is_empty() {
            return Err(ValidationError::empty_field("content").into());
        }

        Ok(Self {
            id,
            conversation_id,
            role,
            content,
            token_count,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a message from persistence.
    pub fn reconstitute(
        id: MessageId,
        conversation_id: ConversationId,
        role: MessageRole,
        content: String,
        token_count: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            conversation_id,
            role,
            content,
            token_count,
            created_at,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn token_count(&self) -> u32 {
        self.token_count
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_requires_title() {
        assert!(Conversation::new(ConversationId::new(), UserId::new(), " ".into()).is_err());
    }

    #[test]
    fn message_requires_content() {
        let err = ConversationMessage::new(
            MessageId::new(),
            ConversationId::new(),
            MessageRole::User,
            String::new(),
            0,
        );
        assert!(err.is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
