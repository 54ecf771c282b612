//! Linear undo buffer over successive document snapshots.

/// Ordered sequence of full document snapshots with a current index.
///
/// Committing a new snapshot discards everything after the current index, so
/// redo after a fresh edit is intentionally unsupported. The dirty flag gates
/// the save control: set on every commit, cleared on undo back to the initial
/// snapshot and on successful persistence.
#[derive(Debug, Clone)]
pub struct EditHistory {
    snapshots: Vec<String>,
    index: usize,
    dirty: bool,
}

impl EditHistory {
    /// Creates a history seeded with the initial document state.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            snapshots: vec![initial.into()],
            index: 0,
            dirty: false,
        }
    }

    /// The snapshot at the current index.
    pub fn current(&self) -> &str {
        &self.snapshots[self.index]
    }

    /// Number of reachable snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when only the initial snapshot exists.
    pub fn is_empty(&self) -> bool {
        self.snapshots.len() <= 1
    }

    /// True when unsaved edits exist.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether undo would change the current snapshot.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Records a new document state.
    ///
    /// Truncates any entries after the current index (discarding redo
    /// candidates), appends the new snapshot, and advances to it.
    pub fn commit(&mut self, new_document: impl Into<String>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(new_document.into());
        self.index = self.snapshots.len() - 1;
        self.dirty = true;
    }

    /// Steps back one snapshot.
    ///
    /// Returns the now-current snapshot, or `None` when already at the
    /// initial state (nothing changed). Undoing back to the initial snapshot
    /// clears the dirty flag.
    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.dirty = self.index != 0;
        Some(&self.snapshots[self.index])
    }

    /// Marks the current snapshot as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_clean() {
        let history = EditHistory::new("a");
        assert_eq!(history.current(), "a");
        assert!(!history.is_dirty());
        assert!(!history.can_undo());
    }

    #[test]
    fn commit_advances_and_marks_dirty() {
        let mut history = EditHistory::new("a");
        history.commit("b");
        assert_eq!(history.current(), "b");
        assert!(history.is_dirty());
        assert!(history.can_undo());
    }

    #[test]
    fn undo_returns_previous_snapshot() {
        let mut history = EditHistory::new("a");
        history.commit("b");
        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.current(), "a");
    }

    #[test]
    fn undo_at_initial_state_is_a_noop() {
        let mut history = EditHistory::new("a");
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), "a");
    }

    #[test]
    fn undo_to_initial_clears_dirty() {
        let mut history = EditHistory::new("a");
        history.commit("b");
        history.commit("c");
        history.undo();
        assert!(history.is_dirty());
        history.undo();
        assert!(!history.is_dirty());
    }

    #[test]
    fn commit_after_undo_discards_redo_entries() {
        let mut history = EditHistory::new("a");
        history.commit("b");
        history.undo();
        history.commit("c");
        // "b" is unreachable: undo steps back to "a", never "b".
        assert_eq!(history.current(), "c");
        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), None);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn mark_saved_clears_dirty_without_moving_index() {
        let mut history = EditHistory::new("a");
        history.commit("b");
        history.mark_saved();
        assert!(!history.is_dirty());
        assert_eq!(history.current(), "b");
    }
}
