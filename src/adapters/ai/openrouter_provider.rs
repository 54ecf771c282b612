//! OpenRouter provider - ChatProvider implementation over OpenRouter's
//! OpenAI-compatible chat completions API.
//!
//! Streams responses via Server-Sent Events: each `data:` line carries a JSON
//! delta until the `[DONE]` marker arrives.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenRouterConfig::new(api_key)
//!     .with_model("deepseek/deepseek-r1-0528:free");
//! let provider = OpenRouterProvider::new(config);
//! ```

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ChatChunk, ChatError, ChatProvider, ChatRequest, ChatRole, ChatStream};

/// Configuration for the OpenRouter provider.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model slug (e.g. "deepseek/deepseek-r1-0528:free").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenRouterConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "deepseek/deepseek-r1-0528:free".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model slug.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenRouter API provider.
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to the wire format.
    fn to_wire_request(&self, request: &ChatRequest) -> WireRequest {
        let mut messages = vec![WireMessage {
            role: "system".to_string(),
            content: request.system_prompt.clone(),
        }];

        for msg in &request.messages {
            messages.push(WireMessage {
                role: match msg.role {
                    ChatRole::System => "system",
                    ChatRole::User => "user",
                    ChatRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            });
        }

        WireRequest {
            model: self.config.model.clone(),
            messages,
            temperature: request.temperature,
            stream: true,
        }
    }

    /// Maps non-success statuses to ChatError.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ChatError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ChatError::AuthenticationFailed),
            429 => Err(ChatError::RateLimited {
                retry_after_secs: 30,
            }),
            400 => Err(ChatError::invalid_response(error_body)),
            500..=599 => Err(ChatError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ChatError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    fn map_send_error(&self, err: reqwest::Error) -> ChatError {
        if err.is_timeout() {
            ChatError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if err.is_connect() {
            ChatError::network(format!("Connection failed: {}", err))
        } else {
            ChatError::network(err.to_string())
        }
    }
}

#[async_trait]
impl ChatProvider for OpenRouterProvider {
    async fn stream_chat(&self, request: ChatRequest) -> Result<ChatStream, ChatError> {
        let wire_request = self.to_wire_request(&request);

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = self.handle_response_status(response).await?;

        // Parse the SSE byte stream into chat chunks.
        let stream = response
            .bytes_stream()
            .map(|chunk_result| match chunk_result {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    parse_sse_chunk(&text)
                }
                Err(e) => vec![Err(ChatError::network(format!("Stream error: {}", e)))],
            })
            .flat_map(stream::iter);

        Ok(Box::pin(stream))
    }
}

/// Parses one SSE payload chunk into zero or more chat chunks.
///
/// A chunk may hold several `data:` lines. Comment lines, keep-alive blanks
/// and undecodable payloads are skipped. The `[DONE]` marker becomes the
/// terminal chunk.
fn parse_sse_chunk(text: &str) -> Vec<Result<ChatChunk, ChatError>> {
    let mut chunks = Vec::new();

    for line in text.lines() {
        let data = match line.strip_prefix("data:") {
            Some(data) => data.trim_start(),
            None => continue,
        };

        if data == "[DONE]" {
            chunks.push(Ok(ChatChunk::done()));
            continue;
        }

        let parsed: WireStreamChunk = match serde_json::from_str(data) {
            Ok(parsed) => parsed,
            Err(_) => continue,
        };

        let delta = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.delta.content)
            .unwrap_or_default();

        if !delta.is_empty() {
            chunks.push(Ok(ChatChunk::content(delta)));
        }
    }

    chunks
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireStreamChunk {
    #[serde(default)]
    choices: Vec<WireStreamChoice>,
}

#[derive(Debug, Deserialize)]
struct WireStreamChoice {
    delta: WireDelta,
}

#[derive(Debug, Deserialize)]
struct WireDelta {
    #[serde(default)]
    content: Option<String>,
}
