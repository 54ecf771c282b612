//! HTTP routes for the streaming chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{stream_chat, stream_requirements_chat, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", post(stream_chat))
        .route("/requirements", post(stream_requirements_chat))
        .with_state(handlers)
}
