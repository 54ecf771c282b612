//! ApplySuggestionHandler - turns raw assistant output into a document edit.
//!
//! Runs the classifier over the full assistant message and, when a valid
//! structured edit is present, applies it to the supplied document. Pure
//! computation; the caller decides whether to persist the result.

use crate::domain::document::{apply, parse_ai_response, DocumentEdit};
use crate::domain::foundation::DomainError;

/// Command carrying the current document and the raw assistant text.
#[derive(Debug, Clone)]
pub struct ApplySuggestionCommand {
    pub document: String,
    pub assistant_text: String,
}

/// Outcome of classifying and applying one assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplySuggestionResult {
    /// Document after the edit; unchanged for discussion-only responses.
    pub content: String,
    /// The structured edit that was applied, if any.
    pub change: Option<DocumentEdit>,
    /// User-facing explanation text.
    pub explanation: String,
}

impl ApplySuggestionResult {
    /// Whether the message carried an edit.
    pub fn changed(&self) -> bool {
        self.change.is_some()
    }
}

/// Handler for applying assistant suggestions.
#[derive(Debug, Clone, Default)]
pub struct ApplySuggestionHandler;

impl ApplySuggestionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ApplySuggestionCommand) -> Result<ApplySuggestionResult, DomainError> {
        let parsed = parse_ai_response(&cmd.assistant_text);

        let content = match &parsed.change {
            Some(edit) => apply(&cmd.document, edit),
            None => cmd.document,
        };

        Ok(ApplySuggestionResult {
            content,
            change: parsed.change,
            explanation: parsed.explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Requirements\n\n## Overview\nHello\n";

    #[test]
    fn modify_suggestion_rewrites_section() {
        let handler = ApplySuggestionHandler::new();
        let text = "Sure, here's the update:\n```json\n{\"action\": \"modify\", \"targetSection\": \"## Overview\", \"newContent\": \"World\"}\n```\nDone.";

        let result = handler
            .handle(ApplySuggestionCommand {
                document: DOC.to_string(),
                assistant_text: text.to_string(),
            })
            .unwrap();

        assert!(result.changed());
        assert_eq!(result.content, "# Requirements\n\n## Overview\nWorld\n");
        assert_eq!(result.explanation, "Done.");
    }

    #[test]
    fn discussion_leaves_document_untouched() {
        let handler = ApplySuggestionHandler::new();
        let result = handler
            .handle(ApplySuggestionCommand {
                document: DOC.to_string(),
                assistant_text: "I'd suggest focusing on the MVP first.".to_string(),
            })
            .unwrap();

        assert!(!result.changed());
        assert_eq!(result.content, DOC);
        assert_eq!(result.explanation, "I'd suggest focusing on the MVP first.");
    }

    #[test]
    fn malformed_json_degrades_to_discussion() {
        let handler = ApplySuggestionHandler::new();
        let text = "```json\n{\"action\": \"modify\",\n```\noops";

        let result = handler
            .handle(ApplySuggestionCommand {
                document: DOC.to_string(),
                assistant_text: text.to_string(),
            })
            .unwrap();

        assert!(!result.changed());
        assert_eq!(result.content, DOC);
    }
}
