//! HTTP DTOs for the streaming chat endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::{ChatMessage, ChatRole};

/// A chat message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub role: ChatRole,
    pub content: String,
}

impl From<ChatMessageDto> for ChatMessage {
    fn from(dto: ChatMessageDto) -> Self {
        ChatMessage {
            role: dto.role,
            content: dto.content,
        }
    }
}

/// Request body for the general assistant endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestBody {
    pub messages: Vec<ChatMessageDto>,
}

/// Request body for the requirements editor endpoint. The current document
/// may be supplied so the model sees what it is editing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsChatRequestBody {
    pub messages: Vec<ChatMessageDto>,
    pub document_context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_body_accepts_document_context() {
        let json = r###"{
            "messages": [{"role": "user", "content": "add a section"}],
            "documentContext": "# Requirements"
        }"###;
        let body: RequirementsChatRequestBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.document_context.as_deref(), Some("# Requirements"));
    }

    #[test]
    fn document_context_is_optional() {
        let json = r#"{"messages": []}"#;
        let body: RequirementsChatRequestBody = serde_json::from_str(json).unwrap();
        assert!(body.document_context.is_none());
    }
}
