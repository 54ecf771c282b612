//! Response classifier - decides whether assistant text carries an edit.
//!
//! The assistant is prompted to answer document-change requests with a fenced
//! ```` ```json ```` block followed by a prose explanation, and discussion
//! answers with plain prose. The classifier extracts the structured edit when
//! one is present and degrades to discussion-only on anything malformed. It
//! never fails past this boundary.

use once_cell::sync::Lazy;
use regex::Regex;

use super::edit::DocumentEdit;

/// Default explanation when the assistant sent an edit with no trailing prose.
const DEFAULT_APPLIED: &str = "Changes applied.";

/// Default explanation when stripping blocks leaves nothing.
const DEFAULT_SUGGESTED: &str = "Changes suggested.";

/// First fenced JSON block and its inner payload.
static JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid fence regex"));

/// All fenced JSON blocks, for explanation stripping.
static ALL_JSON_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json.*?```").expect("valid fence regex"));

/// Internal reasoning blocks some models emit before their answer.
static THINK_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think regex"));

/// Result of classifying one assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// The structured edit, when the message carried a valid one.
    pub change: Option<DocumentEdit>,
    /// User-facing explanation text.
    pub explanation: String,
}

impl ParsedResponse {
    /// A discussion-only response: no edit, the full text as explanation.
    fn discussion(text: &str) -> Self {
        Self {
            change: None,
            explanation: text.to_string(),
        }
    }
}

/// Classifies raw assistant output.
///
/// Looks for the first fenced JSON block and validates its payload as a
/// [`DocumentEdit`]. A missing block, malformed JSON, or a payload that fails
/// validation all degrade to a discussion-only response carrying the full
/// original text. On success the explanation is the text after the closing
/// fence, or a canned default when that is empty.
pub fn parse_ai_response(text: &str) -> ParsedResponse {
    let Some(captures) = JSON_BLOCK.captures(text) else {
        return ParsedResponse::discussion(text);
    };

    let payload = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let block_end = captures.get(0).map(|m| m.end()).unwrap_or(text.len());

    match serde_json::from_str::<DocumentEdit>(payload) {
        Ok(change) => {
            let after = text[block_end..].trim();
            let explanation = if after.is_empty() {
                DEFAULT_APPLIED.to_string()
            } else {
                after.to_string()
            };
            ParsedResponse {
                change: Some(change),
                explanation,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse structured edit, treating as discussion");
            ParsedResponse::discussion(text)
        }
    }
}

/// Strips structured-edit and reasoning blocks from a message, leaving only
/// the user-facing prose. Falls back to a canned default when nothing remains.
pub fn extract_explanation(text: &str) -> String {
    let without_json = ALL_JSON_BLOCKS.replace_all(text, "");
    let cleaned = THINK_BLOCKS.replace_all(&without_json, "");
    let trimmed = cleaned.trim();

    if trimmed.is_empty() {
        DEFAULT_SUGGESTED.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_discussion_only() {
        let text = "This document looks solid. Consider adding acceptance criteria.";
        let parsed = parse_ai_response(text);
        assert_eq!(parsed.change, None);
        assert_eq!(parsed.explanation, text);
    }

    #[test]
    fn modify_block_with_trailing_prose() {
        let text = "Sure, here: ```json\n{\"action\":\"modify\",\"targetSection\":\"## X\",\"newContent\":\"Y\"}\n``` \nDone.";
        let parsed = parse_ai_response(text);
        assert_eq!(
            parsed.change,
            Some(DocumentEdit::Modify {
                target_section: "## X".to_string(),
                new_content: "Y".to_string(),
            })
        );
        assert_eq!(parsed.explanation, "Done.");
    }

    #[test]
    fn empty_trailing_prose_gets_canned_default() {
        let text = "```json\n{\"action\":\"add\",\"section\":\"## A\",\"content\":\"b\"}\n```";
        let parsed = parse_ai_response(text);
        assert!(parsed.change.is_some());
        assert_eq!(parsed.explanation, "Changes applied.");
    }

    #[test]
    fn malformed_json_degrades_to_discussion() {
        let text = "```json\n{not json at all\n```\nOops.";
        let parsed = parse_ai_response(text);
        assert_eq!(parsed.change, None);
        assert_eq!(parsed.explanation, text);
    }

    #[test]
    fn valid_json_failing_validation_degrades_to_discussion() {
        let text = "```json\n{\"action\":\"rename\",\"from\":\"a\"}\n```\nRenamed.";
        let parsed = parse_ai_response(text);
        assert_eq!(parsed.change, None);
        assert_eq!(parsed.explanation, text);
    }

    #[test]
    fn only_first_block_is_classified() {
        let text = "```json\n{\"action\":\"modify\",\"targetSection\":\"## A\",\"newContent\":\"1\"}\n```\nand\n```json\n{\"action\":\"modify\",\"targetSection\":\"## B\",\"newContent\":\"2\"}\n```";
        let parsed = parse_ai_response(text);
        match parsed.change {
            Some(DocumentEdit::Modify { target_section, .. }) => {
                assert_eq!(target_section, "## A")
            }
            other => panic!("expected modify on ## A, got {:?}", other),
        }
    }

    #[test]
    fn extract_explanation_strips_json_and_think_blocks() {
        let text = "<think>internal musing</think>```json\n{\"action\":\"add\",\"section\":\"## A\",\"content\":\"b\"}\n```\nAdded a section.";
        assert_eq!(extract_explanation(text), "Added a section.");
    }

    #[test]
    fn extract_explanation_defaults_when_nothing_remains() {
        let text = "```json\n{\"action\":\"add\",\"section\":\"## A\",\"content\":\"b\"}\n```";
        assert_eq!(extract_explanation(text), "Changes suggested.");
    }

    #[test]
    fn extract_explanation_passes_plain_prose_through() {
        assert_eq!(extract_explanation("  Just a thought.  "), "Just a thought.");
    }
}
