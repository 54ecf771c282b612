//! StreamChatHandler - proxies chat turns to the LLM provider.
//!
//! Builds the system prompt for the requested surface and forwards the
//! message history. The stream is handed back untouched; classification of
//! the assistant's reply runs over the accumulated text on the caller's
//! side, never mid-stream.

use std::sync::Arc;

use crate::ports::{ChatError, ChatMessage, ChatProvider, ChatRequest, ChatStream};

use super::prompts::{assistant_system_prompt, requirements_system_prompt};

/// Which chat surface a request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatSurface {
    /// General project-planning assistant.
    Assistant,
    /// Requirements editor, optionally with the current document embedded
    /// in the system prompt.
    Requirements { document_context: Option<String> },
}

/// Command for one streaming chat turn.
#[derive(Debug, Clone)]
pub struct StreamChatCommand {
    pub surface: ChatSurface,
    pub messages: Vec<ChatMessage>,
}

/// Handler for streaming chat completions.
pub struct StreamChatHandler {
    provider: Arc<dyn ChatProvider>,
}

impl StreamChatHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, cmd: StreamChatCommand) -> Result<ChatStream, ChatError> {
        let system_prompt = match &cmd.surface {
            ChatSurface::Assistant => assistant_system_prompt(),
            ChatSurface::Requirements { document_context } => {
                requirements_system_prompt(document_context.as_deref())
            }
        };

        let request = ChatRequest::new(system_prompt).with_messages(cmd.messages);
        self.provider.stream_chat(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockChatProvider;
    use futures::StreamExt;

    #[tokio::test]
    async fn assistant_surface_uses_general_prompt() {
        let provider = Arc::new(MockChatProvider::new().with_response("hi"));
        let handler = StreamChatHandler::new(provider.clone());

        let mut stream = handler
            .handle(StreamChatCommand {
                surface: ChatSurface::Assistant,
                messages: vec![ChatMessage::user("hello")],
            })
            .await
            .unwrap();
        while stream.next().await.is_some() {}

        let calls = provider.get_calls();
        assert!(calls[0].system_prompt.contains("DevPlanKit"));
        assert!(!calls[0].system_prompt.contains("Requirements Engineer"));
    }

    #[tokio::test]
    async fn requirements_surface_embeds_document() {
        let provider = Arc::new(MockChatProvider::new().with_response("ok"));
        let handler = StreamChatHandler::new(provider.clone());

        let _ = handler
            .handle(StreamChatCommand {
                surface: ChatSurface::Requirements {
                    document_context: Some("# Current".to_string()),
                },
                messages: vec![ChatMessage::user("add a section")],
            })
            .await
            .unwrap();

        let calls = provider.get_calls();
        assert!(calls[0].system_prompt.contains("Requirements Engineer"));
        assert!(calls[0].system_prompt.contains("# Current"));
    }
}
