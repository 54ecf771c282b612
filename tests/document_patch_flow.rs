//! Integration tests for the document patch protocol.
//!
//! Exercises the full flow the requirements editor drives: classify a raw
//! assistant message, apply the structured edit, track it in the editor
//! session, and persist the result through the document store port.

use std::sync::Arc;

use devplankit::adapters::storage::InMemoryDocumentStore;
use devplankit::application::handlers::document::{
    ApplySuggestionCommand, ApplySuggestionHandler, LoadDocumentHandler, SaveDocumentHandler,
};
use devplankit::domain::document::{apply, parse_ai_response, DocumentEdit, EditorSession, SaveState};
use devplankit::domain::foundation::{ErrorCode, ProjectId};
use devplankit::ports::DocumentStore;

const DOC: &str = "# Requirements\n\n## Overview\nA CLI time tracker.\n\n## Scope\nMVP only.\n";

fn add_suggestion() -> String {
    [
        "Good idea, let's capture the risks.",
        "```json",
        r###"{"action": "add", "section": "## Risks", "content": "- Scope creep", "insertAfter": "## Overview"}"###,
        "```",
        "I added a Risks section after the overview.",
    ]
    .join("\n")
}

// =============================================================================
// Classify -> apply -> session -> store
// =============================================================================

#[tokio::test]
async fn suggestion_flows_from_chat_to_storage() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let project_id = ProjectId::new();
    store.seed(project_id, DOC);

    // Open the editor over the stored document.
    let loaded = LoadDocumentHandler::new(store.clone())
        .handle(project_id)
        .await
        .unwrap();
    assert!(!loaded.is_template);
    let mut session = EditorSession::open(project_id, Some(loaded.content));

    // Classify the assistant message and apply its edit.
    let result = ApplySuggestionHandler::new()
        .handle(ApplySuggestionCommand {
            document: session.content().to_string(),
            assistant_text: add_suggestion(),
        })
        .unwrap();

    assert!(result.changed());
    assert!(result.content.contains("## Risks"));
    assert!(result.content.contains("- Scope creep"));
    assert_eq!(result.explanation, "I added a Risks section after the overview.");

    // The new section lands between Overview and Scope.
    let risks = result.content.find("## Risks").unwrap();
    let scope = result.content.find("## Scope").unwrap();
    assert!(risks < scope);

    // Commit to the session and save through the store.
    session.commit(result.content.clone());
    assert_eq!(session.save_state(), SaveState::Dirty);

    session.begin_save().unwrap();
    SaveDocumentHandler::new(store.clone())
        .save(project_id, session.content())
        .await
        .unwrap();
    session.save_succeeded();

    assert_eq!(session.save_state(), SaveState::Clean);
    assert_eq!(
        store.download(project_id).await.unwrap().as_deref(),
        Some(result.content.as_str())
    );
}

#[tokio::test]
async fn undo_restores_previous_snapshot_and_can_be_saved() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let project_id = ProjectId::new();
    store.seed(project_id, DOC);

    let mut session = EditorSession::open(project_id, Some(DOC.to_string()));

    let edited = apply(
        DOC,
        &DocumentEdit::Modify {
            target_section: "## Scope".to_string(),
            new_content: "MVP plus reporting.".to_string(),
        },
    );
    session.commit(edited);
    assert!(session.content().contains("MVP plus reporting."));

    // Undo brings back the original; the session is clean again.
    let restored = session.undo().unwrap().to_string();
    assert_eq!(restored, DOC);
    assert_eq!(session.save_state(), SaveState::Clean);
    assert!(session.begin_save().is_err());

    // A fresh edit after undo saves normally.
    session.commit(format!("{}\n## Notes\n", DOC));
    session.begin_save().unwrap();
    SaveDocumentHandler::new(store.clone())
        .save(project_id, session.content())
        .await
        .unwrap();
    session.save_succeeded();

    assert!(store
        .download(project_id)
        .await
        .unwrap()
        .unwrap()
        .contains("## Notes"));
}

#[tokio::test]
async fn discussion_response_changes_nothing() {
    let parsed = parse_ai_response("You could split the scope into phases.");
    assert!(parsed.change.is_none());

    let result = ApplySuggestionHandler::new()
        .handle(ApplySuggestionCommand {
            document: DOC.to_string(),
            assistant_text: "You could split the scope into phases.".to_string(),
        })
        .unwrap();
    assert!(!result.changed());
    assert_eq!(result.content, DOC);
}

#[tokio::test]
async fn create_conflicts_when_document_exists() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let project_id = ProjectId::new();
    let handler = SaveDocumentHandler::new(store);

    handler.create(project_id, DOC).await.unwrap();
    let err = handler.create(project_id, "other").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SaveInFlight);
}

#[tokio::test]
async fn missing_document_loads_as_template() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let loaded = LoadDocumentHandler::new(store)
        .handle(ProjectId::new())
        .await
        .unwrap();
    assert!(loaded.is_template);
    assert!(loaded.content.starts_with("# Requirements Document"));
}

// =============================================================================
// Applier properties
// =============================================================================

mod applier_properties {
    use super::*;
    use proptest::prelude::*;

    fn section_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,20}".prop_map(|s| format!("## {}", s.trim()))
    }

    fn body_text() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 .,-]{1,80}"
    }

    proptest! {
        // An end-append always grows the document and the appended content
        // appears at the tail.
        #[test]
        fn end_append_grows_document(section in section_name(), content in body_text()) {
            let edit = DocumentEdit::Add {
                section: section.clone(),
                content: content.clone(),
                insert_after: None,
            };
            let result = apply(DOC, &edit);

            prop_assert!(result.len() > DOC.len());
            prop_assert!(result.trim_end().ends_with(content.trim_end()));
            prop_assert!(result.contains(&section));
        }

        // Modifying one section never disturbs text before the target
        // heading.
        #[test]
        fn modify_preserves_prefix(new_body in body_text()) {
            let edit = DocumentEdit::Modify {
                target_section: "## Scope".to_string(),
                new_content: new_body.clone(),
            };
            let result = apply(DOC, &edit);

            let prefix_end = DOC.find("## Scope").unwrap();
            prop_assert_eq!(&result[..prefix_end], &DOC[..prefix_end]);
            // The target section runs to the end of the document, so the
            // replacement body is now the tail.
            prop_assert!(result.trim_end().ends_with(new_body.trim_end()));
        }

        // An edit targeting a heading that does not exist falls back to an
        // end-append rather than corrupting the document.
        #[test]
        fn missing_anchor_falls_back_to_append(content in body_text()) {
            let edit = DocumentEdit::Add {
                section: "## Extras".to_string(),
                content: content.clone(),
                insert_after: Some("## Nonexistent".to_string()),
            };
            let result = apply(DOC, &edit);

            prop_assert!(result.starts_with(DOC.trim_end()));
            prop_assert!(result.contains("## Extras"));
        }
    }
}
