//! HTTP DTOs for requirements document endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::document::{ApplySuggestionResult, LoadedDocument};
use crate::domain::document::DocumentEdit;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for creating or saving a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocumentRequest {
    pub content: String,
}

/// Request to classify raw assistant text and apply any edit it carries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySuggestionRequest {
    /// Current document the edit applies to.
    pub content: String,
    /// Raw assistant message, fenced JSON block and all.
    pub assistant_text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A loaded document, flagged when the initial template was served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub content: String,
    pub is_template: bool,
}

impl From<LoadedDocument> for DocumentResponse {
    fn from(doc: LoadedDocument) -> Self {
        Self {
            content: doc.content,
            is_template: doc.is_template,
        }
    }
}

/// Outcome of classifying and applying one assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySuggestionResponse {
    /// Document after the edit; unchanged for discussion-only responses.
    pub content: String,
    /// Whether the message carried an edit.
    pub changed: bool,
    /// The structured edit that was applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<DocumentEdit>,
    /// User-facing explanation text.
    pub explanation: String,
}

impl From<ApplySuggestionResult> for ApplySuggestionResponse {
    fn from(result: ApplySuggestionResult) -> Self {
        Self {
            changed: result.changed(),
            content: result.content,
            change: result.change,
            explanation: result.explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_request_accepts_camel_case() {
        let json = r###"{"content": "# Doc", "assistantText": "looks good"}"###;
        let req: ApplySuggestionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.assistant_text, "looks good");
    }

    #[test]
    fn apply_response_omits_absent_change() {
        let response = ApplySuggestionResponse {
            content: "# Doc".to_string(),
            changed: false,
            change: None,
            explanation: "no edit".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"change\""));
        assert!(json.contains("\"changed\":false"));
    }
}
