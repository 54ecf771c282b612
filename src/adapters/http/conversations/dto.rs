//! HTTP DTOs for conversation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{Conversation, ConversationMessage, MessageRole};
use crate::domain::foundation::UserId;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub user_id: UserId,
    pub title: String,
}

/// Request to append a message to a conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendMessageRequest {
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub token_count: u32,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Conversation as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Conversation> for ConversationResponse {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id().to_string(),
            user_id: conversation.user_id().to_string(),
            title: conversation.title().to_string(),
            created_at: conversation.created_at().to_string(),
            updated_at: conversation.updated_at().to_string(),
        }
    }
}

/// Message as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub conversation_id: String,
    pub role: MessageRole,
    pub content: String,
    pub token_count: u32,
    pub created_at: String,
}

impl From<&ConversationMessage> for MessageResponse {
    fn from(message: &ConversationMessage) -> Self {
        Self {
            id: message.id().to_string(),
            conversation_id: message.conversation_id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            token_count: message.token_count(),
            created_at: message.created_at().to_string(),
        }
    }
}
