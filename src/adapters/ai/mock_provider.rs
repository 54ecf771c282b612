//! Mock chat provider for testing.
//!
//! Provides a configurable implementation of the ChatProvider port so tests
//! can run without calling a real LLM API.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockChatProvider::new()
//!     .with_response("Hello, I'm the assistant!");
//!
//! let stream = provider.stream_chat(request).await?;
//! ```

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ChatChunk, ChatError, ChatProvider, ChatRequest, ChatStream};

/// Mock chat provider for testing.
#[derive(Debug, Clone)]
pub struct MockChatProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
enum MockResponse {
    /// Stream the given text, split into word chunks.
    Success(String),
    /// Fail the request with this error.
    Error(ChatError),
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChatProvider {
    /// Creates a new mock provider with no queued responses.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Success(content.into()));
        drop(responses);
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: ChatError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Error(error));
        drop(responses);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn stream_chat(&self, request: ChatRequest) -> Result<ChatStream, ChatError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(content) => {
                // Split into word chunks to simulate token streaming. The
                // final chunk carries the trailing word without a space so
                // the concatenation reproduces the original text.
                let words: Vec<&str> = content.split(' ').collect();
                let last = words.len().saturating_sub(1);
                let word_chunks: Vec<Result<ChatChunk, ChatError>> = words
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        if i == last {
                            Ok(ChatChunk::content(s.to_string()))
                        } else {
                            Ok(ChatChunk::content(format!("{} ", s)))
                        }
                    })
                    .collect();

                let chunks = stream::iter(word_chunks);
                let final_chunk = stream::once(async { Ok(ChatChunk::done()) });

                Ok(Box::pin(chunks.chain(final_chunk)))
            }
            MockResponse::Error(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ChatMessage;

    async fn collect_text(mut stream: ChatStream) -> String {
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.unwrap();
            if chunk.finished {
                break;
            }
            text.push_str(&chunk.delta);
        }
        text
    }

    #[tokio::test]
    async fn streams_queued_response() {
        let provider = MockChatProvider::new().with_response("Hello there world");
        let request = ChatRequest::new("system").with_message(ChatMessage::user("hi"));

        let stream = provider.stream_chat(request).await.unwrap();
        assert_eq!(collect_text(stream).await, "Hello there world");
    }

    #[tokio::test]
    async fn records_calls() {
        let provider = MockChatProvider::new().with_response("ok");
        let request = ChatRequest::new("system").with_message(ChatMessage::user("question"));

        let _ = provider.stream_chat(request).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].messages[0].content, "question");
    }

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let provider = MockChatProvider::new()
            .with_response("first")
            .with_response("second");
        let request = ChatRequest::new("system");

        let s1 = provider.stream_chat(request.clone()).await.unwrap();
        assert_eq!(collect_text(s1).await, "first");

        let s2 = provider.stream_chat(request).await.unwrap();
        assert_eq!(collect_text(s2).await, "second");
    }

    #[tokio::test]
    async fn injected_errors_fail_the_request() {
        let provider =
            MockChatProvider::new().with_error(ChatError::RateLimited { retry_after_secs: 5 });
        let request = ChatRequest::new("system");

        let result = provider.stream_chat(request).await;
        assert!(matches!(result, Err(ChatError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn empty_queue_falls_back_to_default() {
        let provider = MockChatProvider::new();
        let stream = provider.stream_chat(ChatRequest::new("system")).await.unwrap();
        assert_eq!(collect_text(stream).await, "Mock response");
    }
}
