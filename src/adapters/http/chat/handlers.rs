//! HTTP handlers for the streaming chat endpoints.
//!
//! Both endpoints respond with `text/event-stream`: named `delta` events
//! carrying JSON text fragments, a terminal `done` event, and an `error`
//! event when the provider fails mid-stream. Failures before the stream
//! opens surface as plain JSON error responses.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Json, Response,
    },
};
use futures::StreamExt;
use serde::Serialize;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::chat::{ChatSurface, StreamChatCommand, StreamChatHandler};
use crate::ports::{ChatError, ChatStream};

use super::dto::{ChatRequestBody, RequirementsChatRequestBody};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    stream: Arc<StreamChatHandler>,
}

impl ChatHandlers {
    pub fn new(stream: Arc<StreamChatHandler>) -> Self {
        Self { stream }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Stream an assistant reply
pub async fn stream_chat(
    State(handlers): State<ChatHandlers>,
    Json(body): Json<ChatRequestBody>,
) -> Response {
    let cmd = StreamChatCommand {
        surface: ChatSurface::Assistant,
        messages: body.messages.into_iter().map(Into::into).collect(),
    };
    start_stream(&handlers, cmd).await
}

/// POST /api/chat/requirements - Stream a requirements-editor reply
pub async fn stream_requirements_chat(
    State(handlers): State<ChatHandlers>,
    Json(body): Json<RequirementsChatRequestBody>,
) -> Response {
    let cmd = StreamChatCommand {
        surface: ChatSurface::Requirements {
            document_context: body.document_context,
        },
        messages: body.messages.into_iter().map(Into::into).collect(),
    };
    start_stream(&handlers, cmd).await
}

async fn start_stream(handlers: &ChatHandlers, cmd: StreamChatCommand) -> Response {
    match handlers.stream.handle(cmd).await {
        Ok(stream) => sse_response(stream),
        Err(e) => chat_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SSE translation
// ════════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct DeltaPayload<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct ErrorPayload {
    message: String,
    retryable: bool,
}

fn sse_response(stream: ChatStream) -> Response {
    let events = stream.map(|item| -> Result<Event, Infallible> {
        Ok(match item {
            Ok(chunk) if chunk.finished => Event::default().event("done").data("{}"),
            Ok(chunk) => {
                let payload = DeltaPayload {
                    content: &chunk.delta,
                };
                match serde_json::to_string(&payload) {
                    Ok(json) => Event::default().event("delta").data(json),
                    Err(e) => error_event(&ChatError::invalid_response(e.to_string())),
                }
            }
            Err(e) => error_event(&e),
        })
    });

    Sse::new(events).keep_alive(KeepAlive::default()).into_response()
}

fn error_event(err: &ChatError) -> Event {
    let payload = ErrorPayload {
        message: err.to_string(),
        retryable: err.is_retryable(),
    };
    let json = serde_json::to_string(&payload)
        .unwrap_or_else(|_| r#"{"message":"stream failed","retryable":false}"#.to_string());
    Event::default().event("error").data(json)
}

/// Maps a provider failure that happened before the stream opened.
fn chat_error_response(err: ChatError) -> Response {
    let status = match &err {
        ChatError::AuthenticationFailed => StatusCode::BAD_GATEWAY,
        ChatError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        ChatError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        ChatError::Network(_) | ChatError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        ChatError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let body = ErrorResponse::new("AI_PROVIDER_ERROR", err.to_string());
    (status, Json(body)).into_response()
}
