//! HTTP routes for conversation endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    append_message, create_conversation, delete_conversation, delete_message, list_conversations,
    list_messages, ConversationsHandlers,
};

/// Creates the conversations router, including nested message routes.
pub fn conversations_routes(handlers: ConversationsHandlers) -> Router {
    Router::new()
        .route("/", post(create_conversation))
        .route("/", get(list_conversations))
        .route("/:id", delete(delete_conversation))
        .route("/:id/messages", get(list_messages))
        .route("/:id/messages", post(append_message))
        .route("/messages/:id", delete(delete_message))
        .with_state(handlers)
}
