//! Editor session aggregate for one open requirements document.
//!
//! Owns the current content, the undo history, and the save state machine:
//!
//! ```text
//! Clean --commit--> Dirty --begin_save--> Saving --save_succeeded--> Clean
//!   ^                 |  ^                   |
//!   '----undo to 0----'  '---save_failed----'
//! ```
//!
//! Persistence itself is external (the document store port); the session only
//! does the bookkeeping. One save may be in flight at a time; the save action
//! is gated by [`EditorSession::can_save`].

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};

use super::history::EditHistory;
use super::template::initial_template;

/// Save state of an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    /// Content matches the last saved (or initial) state.
    Clean,
    /// Unsaved edits exist; saving is allowed.
    Dirty,
    /// A save request is in flight; further saves are blocked.
    Saving,
}

/// A single-user editing session over one project's requirements document.
#[derive(Debug, Clone)]
pub struct EditorSession {
    project_id: ProjectId,
    history: EditHistory,
    save_state: SaveState,
}

impl EditorSession {
    /// Opens a session over a stored document, falling back to the fixed
    /// template when the project has no document yet.
    pub fn open(project_id: ProjectId, stored: Option<String>) -> Self {
        let content = stored.unwrap_or_else(initial_template);
        Self {
            project_id,
            history: EditHistory::new(content),
            save_state: SaveState::Clean,
        }
    }

    /// The project this session edits.
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// The current document content.
    pub fn content(&self) -> &str {
        self.history.current()
    }

    /// Current save state.
    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    /// Whether the save action is enabled.
    pub fn can_save(&self) -> bool {
        self.save_state == SaveState::Dirty
    }

    /// Whether undo would change the document.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Records a new document state (applied edit or manual change).
    ///
    /// Edits made while a save is in flight keep the session in `Saving`;
    /// the outcome transition picks up the dirty history afterwards.
    pub fn commit(&mut self, new_content: impl Into<String>) {
        self.history.commit(new_content);
        if self.save_state != SaveState::Saving {
            self.save_state = SaveState::Dirty;
        }
    }

    /// Steps the document back one snapshot.
    ///
    /// Returns the restored content, or `None` at the initial state.
    pub fn undo(&mut self) -> Option<&str> {
        self.history.undo()?;
        if self.save_state != SaveState::Saving {
            self.save_state = if self.history.is_dirty() {
                SaveState::Dirty
            } else {
                SaveState::Clean
            };
        }
        Some(self.history.current())
    }

    /// Marks a save as started.
    ///
    /// Only valid from `Dirty`; a clean session has nothing to save and a
    /// second save must not overlap the one in flight.
    pub fn begin_save(&mut self) -> Result<(), DomainError> {
        match self.save_state {
            SaveState::Dirty => {
                self.save_state = SaveState::Saving;
                Ok(())
            }
            SaveState::Saving => Err(DomainError::new(
                ErrorCode::SaveInFlight,
                "A save is already in flight for this document",
            )),
            SaveState::Clean => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Nothing to save: document is clean",
            )),
        }
    }

    /// Records a successful save.
    pub fn save_succeeded(&mut self) {
        self.history.mark_saved();
        self.save_state = SaveState::Clean;
    }

    /// Records a failed save; the document stays dirty so the user can retry.
    pub fn save_failed(&mut self) {
        self.save_state = SaveState::Dirty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::open(ProjectId::new(), Some("# Doc\n".to_string()))
    }

    #[test]
    fn opens_clean_with_stored_content() {
        let s = session();
        assert_eq!(s.content(), "# Doc\n");
        assert_eq!(s.save_state(), SaveState::Clean);
        assert!(!s.can_save());
    }

    #[test]
    fn opens_with_template_when_nothing_stored() {
        let s = EditorSession::open(ProjectId::new(), None);
        assert!(s.content().starts_with("# Requirements Document"));
        assert_eq!(s.save_state(), SaveState::Clean);
    }

    #[test]
    fn commit_moves_clean_to_dirty() {
        let mut s = session();
        s.commit("# Doc\nedited\n");
        assert_eq!(s.save_state(), SaveState::Dirty);
        assert!(s.can_save());
    }

    #[test]
    fn undo_to_initial_returns_to_clean() {
        let mut s = session();
        s.commit("v2");
        assert_eq!(s.undo(), Some("# Doc\n"));
        assert_eq!(s.save_state(), SaveState::Clean);
    }

    #[test]
    fn undo_mid_history_stays_dirty() {
        let mut s = session();
        s.commit("v2");
        s.commit("v3");
        s.undo();
        assert_eq!(s.save_state(), SaveState::Dirty);
    }

    #[test]
    fn save_lifecycle_success() {
        let mut s = session();
        s.commit("v2");
        s.begin_save().unwrap();
        assert_eq!(s.save_state(), SaveState::Saving);
        assert!(!s.can_save());
        s.save_succeeded();
        assert_eq!(s.save_state(), SaveState::Clean);
    }

    #[test]
    fn save_failure_returns_to_dirty() {
        let mut s = session();
        s.commit("v2");
        s.begin_save().unwrap();
        s.save_failed();
        assert_eq!(s.save_state(), SaveState::Dirty);
        assert!(s.can_save());
    }

    #[test]
    fn begin_save_rejected_when_clean() {
        let mut s = session();
        let err = s.begin_save().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn overlapping_save_is_rejected() {
        let mut s = session();
        s.commit("v2");
        s.begin_save().unwrap();
        let err = s.begin_save().unwrap_err();
        assert_eq!(err.code, ErrorCode::SaveInFlight);
    }

    #[test]
    fn commit_during_save_keeps_saving_state() {
        let mut s = session();
        s.commit("v2");
        s.begin_save().unwrap();
        s.commit("v3");
        assert_eq!(s.save_state(), SaveState::Saving);
        s.save_succeeded();
        assert_eq!(s.save_state(), SaveState::Clean);
        assert_eq!(s.content(), "v3");
    }
}
