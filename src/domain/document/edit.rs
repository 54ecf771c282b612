//! Structured edit descriptor for AI-suggested document changes.

use serde::{Deserialize, Serialize};

/// A machine-readable description of a single change to a requirements
/// document, as emitted by the assistant inside a fenced JSON block.
///
/// Discriminated on the `action` field. Section and anchor values are full
/// heading lines (e.g. `"## Risks"`) supplied as free text by the model, so
/// nothing here is guaranteed to exist in the target document; the applier
/// defines fallback behavior for missing anchors.
///
/// # Wire Format
///
/// ```json
/// {"action":"add","section":"## Risks","content":"...","insertAfter":"## Overview"}
/// {"action":"modify","targetSection":"## Risks","newContent":"..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum DocumentEdit {
    /// Insert a new section beneath an existing one (or at the end).
    #[serde(rename_all = "camelCase")]
    Add {
        /// Full heading line of the new section.
        section: String,
        /// Markdown body to insert beneath the heading.
        content: String,
        /// Heading line after which to insert, or the sentinel `"end"`.
        /// Absent means end-of-document.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        insert_after: Option<String>,
    },
    /// Replace the body of an existing section.
    #[serde(rename_all = "camelCase")]
    Modify {
        /// Full heading line of the section to replace.
        target_section: String,
        /// Complete replacement body for that section.
        new_content: String,
    },
}

impl DocumentEdit {
    /// Returns true when this Add edit targets the end of the document,
    /// either explicitly via the `"end"` sentinel or by omitting the anchor.
    pub fn is_end_append(&self) -> bool {
        match self {
            DocumentEdit::Add { insert_after, .. } => {
                insert_after.as_deref().map_or(true, |a| a == "end")
            }
            DocumentEdit::Modify { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_deserializes_from_wire_format() {
        let json = r###"{"action":"add","section":"## Risks","content":"- risk","insertAfter":"## Overview"}"###;
        let edit: DocumentEdit = serde_json::from_str(json).unwrap();
        assert_eq!(
            edit,
            DocumentEdit::Add {
                section: "## Risks".to_string(),
                content: "- risk".to_string(),
                insert_after: Some("## Overview".to_string()),
            }
        );
    }

    #[test]
    fn add_insert_after_is_optional() {
        let json = r###"{"action":"add","section":"## Risks","content":"- risk"}"###;
        let edit: DocumentEdit = serde_json::from_str(json).unwrap();
        assert!(edit.is_end_append());
    }

    #[test]
    fn modify_deserializes_from_wire_format() {
        let json = r###"{"action":"modify","targetSection":"## X","newContent":"Y"}"###;
        let edit: DocumentEdit = serde_json::from_str(json).unwrap();
        assert_eq!(
            edit,
            DocumentEdit::Modify {
                target_section: "## X".to_string(),
                new_content: "Y".to_string(),
            }
        );
    }

    #[test]
    fn unknown_action_is_rejected() {
        let json = r###"{"action":"delete","targetSection":"## X"}"###;
        assert!(serde_json::from_str::<DocumentEdit>(json).is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r###"{"action":"modify","targetSection":"## X"}"###;
        assert!(serde_json::from_str::<DocumentEdit>(json).is_err());
    }

    #[test]
    fn end_sentinel_is_end_append() {
        let json = r###"{"action":"add","section":"## A","content":"b","insertAfter":"end"}"###;
        let edit: DocumentEdit = serde_json::from_str(json).unwrap();
        assert!(edit.is_end_append());
    }
}
