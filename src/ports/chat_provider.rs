//! Chat provider port - interface for streaming LLM completions.
//!
//! Abstracts the hosted language-model API the chat endpoints proxy to.
//! Only streaming is exposed: the UI renders tokens as they arrive, and the
//! response classifier runs over the fully accumulated text once the stream
//! completes.

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use thiserror::Error;

/// Stream of completion chunks.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatChunk, ChatError>> + Send>>;

/// Port for LLM chat completions.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Starts a streaming completion.
    ///
    /// The returned stream yields text deltas until a final chunk with
    /// `finished = true`. Dropping the stream cancels the request; no
    /// side effects survive cancellation.
    async fn stream_chat(&self, request: ChatRequest) -> Result<ChatStream, ChatError>;
}

/// A chat message in provider-agnostic form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Role of a chat message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// Request for a streaming completion.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation history plus the current user message.
    pub messages: Vec<ChatMessage>,
    /// System prompt guiding model behavior.
    pub system_prompt: String,
    /// Temperature, when the caller wants to override the provider default.
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a request with the given system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: system_prompt.into(),
            temperature: None,
        }
    }

    /// Adds a message.
    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Replaces the message list.
    pub fn with_messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages = messages;
        self
    }
}

/// One streamed completion chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatChunk {
    /// New text in this chunk (may be empty on the final chunk).
    pub delta: String,
    /// True on the terminal chunk.
    pub finished: bool,
}

impl ChatChunk {
    /// A content chunk.
    pub fn content(delta: impl Into<String>) -> Self {
        Self {
            delta: delta.into(),
            finished: false,
        }
    }

    /// The terminal chunk.
    pub fn done() -> Self {
        Self {
            delta: String::new(),
            finished: true,
        }
    }
}

/// Errors from the chat provider.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("Authentication with the AI provider failed")]
    AuthenticationFailed,

    #[error("Rate limited by the AI provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

impl ChatError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ChatError::Network(message.into())
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ChatError::InvalidResponse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        ChatError::Unavailable(message.into())
    }

    /// Whether a retry could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ChatError::RateLimited { .. }
                | ChatError::Timeout { .. }
                | ChatError::Network(_)
                | ChatError::Unavailable(_)
        )
    }
}
