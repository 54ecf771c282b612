//! HTTP handlers for conversation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::projects::UserQuery;
use crate::application::handlers::conversation::{
    AppendMessageCommand, ConversationHandlers as ConversationUseCases, CreateConversationCommand,
    MessageHandlers,
};
use crate::domain::foundation::{ConversationId, MessageId};

use super::dto::{
    AppendMessageRequest, ConversationResponse, CreateConversationRequest, MessageResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConversationsHandlers {
    conversations: Arc<ConversationUseCases>,
    messages: Arc<MessageHandlers>,
}

impl ConversationsHandlers {
    pub fn new(conversations: Arc<ConversationUseCases>, messages: Arc<MessageHandlers>) -> Self {
        Self {
            conversations,
            messages,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Conversation handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/conversations - Start a conversation
pub async fn create_conversation(
    State(handlers): State<ConversationsHandlers>,
    Json(req): Json<CreateConversationRequest>,
) -> Response {
    let cmd = CreateConversationCommand {
        user_id: req.user_id,
        title: req.title,
    };

    match handlers.conversations.create(cmd).await {
        Ok(conversation) => (
            StatusCode::CREATED,
            Json(ConversationResponse::from(&conversation)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/conversations - List the user's conversations, most recent first
pub async fn list_conversations(
    State(handlers): State<ConversationsHandlers>,
    Query(query): Query<UserQuery>,
) -> Response {
    match handlers.conversations.list(query.user_id).await {
        Ok(conversations) => {
            let body: Vec<ConversationResponse> = conversations
                .iter()
                .map(ConversationResponse::from)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/conversations/:id - Delete a conversation and its messages
pub async fn delete_conversation(
    State(handlers): State<ConversationsHandlers>,
    Path(id): Path<ConversationId>,
) -> Response {
    match handlers.conversations.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Message handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/conversations/:id/messages - List messages chronologically
pub async fn list_messages(
    State(handlers): State<ConversationsHandlers>,
    Path(id): Path<ConversationId>,
) -> Response {
    match handlers.messages.list(id).await {
        Ok(messages) => {
            let body: Vec<MessageResponse> = messages.iter().map(MessageResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/conversations/:id/messages - Append a message
pub async fn append_message(
    State(handlers): State<ConversationsHandlers>,
    Path(id): Path<ConversationId>,
    Json(req): Json<AppendMessageRequest>,
) -> Response {
    let cmd = AppendMessageCommand {
        conversation_id: id,
        role: req.role,
        content: req.content,
        token_count: req.token_count,
    };

    match handlers.messages.append(cmd).await {
        Ok(message) => {
            (StatusCode::CREATED, Json(MessageResponse::from(&message))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/conversations/messages/:id - Delete a message
pub async fn delete_message(
    State(handlers): State<ConversationsHandlers>,
    Path(id): Path<MessageId>,
) -> Response {
    match handlers.messages.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
