//! Edit session controller
//!
//! A two-state machine: `Viewing` (no session) or `Editing` one cell with a
//! text buffer. The store is only written on `commit`; `cancel` and session
//! replacement never touch it.
//!
//! ```text
//!            begin_edit                 update_buffer / keystrokes
//!  Viewing ─────────────▶ Editing ◀──────────────────────────────┐
//!     ▲                     │  │                                  │
//!     │      commit         │  └──────────────────────────────────┘
//!     ├─────────────────────┤
//!     │      cancel         │
//!     └─────────────────────┘
//! ```

use super::store::{CellValue, GridStore};
use super::SheetError;
use std::fmt;

/// Address of one cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub column: String,
}

impl CellCoord {
    pub fn new(row: usize, column: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.column)
    }
}

/// What happens to an in-flight edit when another cell is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacePolicy {
    /// Drop the previous buffer without writing it
    #[default]
    Discard,
    /// Write the previous buffer to the store before opening the new cell
    Commit,
}

impl ReplacePolicy {
    /// Parse policy string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "commit" => Self::Commit,
            _ => Self::Discard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Commit => "commit",
        }
    }
}

/// The cell being edited and its in-progress text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub coord: CellCoord,
    buffer: String,
    /// Caret position as a char index into `buffer`
    caret: usize,
}

impl EditSession {
    fn new(coord: CellCoord, buffer: String) -> Self {
        let caret = buffer.chars().count();
        Self {
            coord,
            buffer,
            caret,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn replace(&mut self, text: String) {
        self.buffer = text;
        self.caret = self.char_len();
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.caret);
        self.buffer.insert(at, c);
        self.caret += 1;
    }

    fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_offset(self.caret - 1);
        self.buffer.remove(at);
        self.caret -= 1;
    }

    fn delete(&mut self) {
        if self.caret >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.caret);
        self.buffer.remove(at);
    }
}

/// Current state of the controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(EditSession),
}

/// Mediates view/edit transitions for one cell at a time
#[derive(Debug, Clone, Default)]
pub struct EditController {
    state: EditState,
    policy: ReplacePolicy,
}

impl EditController {
    pub fn new(policy: ReplacePolicy) -> Self {
        Self {
            state: EditState::Viewing,
            policy,
        }
    }

    #[allow(dead_code)]
    pub fn policy(&self) -> ReplacePolicy {
        self.policy
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn session(&self) -> Option<&EditSession> {
        match &self.state {
            EditState::Editing(session) => Some(session),
            EditState::Viewing => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut EditSession> {
        match &mut self.state {
            EditState::Editing(session) => Some(session),
            EditState::Viewing => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    pub fn is_editing_cell(&self, row: usize, column: &str) -> bool {
        self.session()
            .is_some_and(|s| s.coord.row == row && s.coord.column == column)
    }

    /// Open an edit on (row, column), seeding the buffer from the store
    ///
    /// Any session already open is replaced according to the policy. An
    /// invalid coordinate is returned as an error and the state is unchanged.
    pub fn begin_edit(
        &mut self,
        store: &mut GridStore,
        row: usize,
        column: &str,
    ) -> Result<(), SheetError> {
        store.get_cell(row, column)?;

        if let EditState::Editing(prev) = std::mem::take(&mut self.state) {
            match self.policy {
                ReplacePolicy::Commit => {
                    store.set_cell(prev.coord.row, &prev.coord.column, prev.buffer)?;
                    tracing::debug!(cell = %prev.coord, "committed replaced edit");
                }
                ReplacePolicy::Discard => {
                    let stored = store.display_value(prev.coord.row, &prev.coord.column)?;
                    if stored != prev.buffer {
                        tracing::warn!(
                            cell = %prev.coord,
                            "discarded unsaved edit when opening another cell"
                        );
                    }
                }
            }
        }

        // Read after resolving the previous session: a commit may have written this cell
        let seed = store.display_value(row, column)?;
        let coord = CellCoord::new(row, column);
        tracing::debug!(cell = %coord, "edit started");
        self.state = EditState::Editing(EditSession::new(coord, seed));
        Ok(())
    }

    /// Replace the buffer verbatim. No-op while viewing.
    pub fn update_buffer(&mut self, text: impl Into<String>) {
        if let Some(session) = self.session_mut() {
            session.replace(text.into());
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(session) = self.session_mut() {
            session.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = self.session_mut() {
            session.backspace();
        }
    }

    pub fn delete(&mut self) {
        if let Some(session) = self.session_mut() {
            session.delete();
        }
    }

    pub fn caret_left(&mut self) {
        if let Some(session) = self.session_mut() {
            session.caret = session.caret.saturating_sub(1);
        }
    }

    pub fn caret_right(&mut self) {
        if let Some(session) = self.session_mut() {
            session.caret = (session.caret + 1).min(session.char_len());
        }
    }

    pub fn caret_home(&mut self) {
        if let Some(session) = self.session_mut() {
            session.caret = 0;
        }
    }

    pub fn caret_end(&mut self) {
        if let Some(session) = self.session_mut() {
            session.caret = session.char_len();
        }
    }

    /// Write the buffer into the store and return to viewing
    ///
    /// Returns the committed coordinate, or `None` if nothing was being edited.
    pub fn commit(&mut self, store: &mut GridStore) -> Result<Option<CellCoord>, SheetError> {
        let EditState::Editing(session) = std::mem::take(&mut self.state) else {
            return Ok(None);
        };
        store.set_cell(
            session.coord.row,
            &session.coord.column,
            CellValue::Text(session.buffer),
        )?;
        tracing::debug!(cell = %session.coord, "edit committed");
        Ok(Some(session.coord))
    }

    /// Drop the buffer and return to viewing. The store is not touched.
    pub fn cancel(&mut self) -> Option<CellCoord> {
        match std::mem::take(&mut self.state) {
            EditState::Editing(session) => {
                tracing::debug!(cell = %session.coord, "edit cancelled");
                Some(session.coord)
            }
            EditState::Viewing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GridStore, EditController) {
        (GridStore::initialize(), EditController::default())
    }

    #[test]
    fn starts_viewing() {
        let (_, ctl) = setup();
        assert_eq!(ctl.state(), &EditState::Viewing);
        assert!(ctl.session().is_none());
    }

    #[test]
    fn begin_edit_seeds_buffer() {
        let (mut store, mut ctl) = setup();
        ctl.begin_edit(&mut store, 0, "status").unwrap();

        let session = ctl.session().unwrap();
        assert_eq!(session.coord, CellCoord::new(0, "status"));
        assert_eq!(session.buffer(), "in-process");
        assert_eq!(session.caret(), "in-process".len());
    }

    #[test]
    fn edit_round_trip_commits() {
        let (mut store, mut ctl) = setup();
        ctl.begin_edit(&mut store, 0, "status").unwrap();
        ctl.update_buffer("Complete");
        let committed = ctl.commit(&mut store).unwrap();

        assert_eq!(committed, Some(CellCoord::new(0, "status")));
        assert_eq!(store.get_cell(0, "status").unwrap(), CellValue::from("Complete"));
        assert!(!ctl.is_editing());
    }

    #[test]
    fn cancel_leaves_store_untouched() {
        let inputs = ["", "Complete", "   ", "12345", "ü ₹ 漢字"];
        for (r, col) in [(0, "status"), (4, "est-value"), (12, "url"), (24, "job-request")] {
            for text in inputs {
                let (mut store, mut ctl) = setup();
                let before = store.get_cell(r, col).unwrap();

                ctl.begin_edit(&mut store, r, col).unwrap();
                ctl.update_buffer(text);
                assert_eq!(ctl.cancel(), Some(CellCoord::new(r, col)));

                assert_eq!(store.get_cell(r, col).unwrap(), before);
                assert!(!ctl.is_editing());
            }
        }
    }

    #[test]
    fn transitions_while_viewing_are_noops() {
        let (mut store, mut ctl) = setup();
        let before = store.clone();

        ctl.update_buffer("ignored");
        ctl.insert_char('x');
        ctl.backspace();
        assert_eq!(ctl.commit(&mut store).unwrap(), None);
        assert_eq!(ctl.cancel(), None);

        assert_eq!(ctl.state(), &EditState::Viewing);
        assert_eq!(store.rows(), before.rows());
    }

    #[test]
    fn second_begin_replaces_session_and_discards_buffer() {
        let (mut store, mut ctl) = setup();
        ctl.begin_edit(&mut store, 0, "status").unwrap();
        ctl.update_buffer("lost");
        ctl.begin_edit(&mut store, 1, "priority").unwrap();

        assert!(ctl.is_editing_cell(1, "priority"));
        assert!(!ctl.is_editing_cell(0, "status"));
        assert_eq!(ctl.session().unwrap().buffer(), "High");
        assert_eq!(store.get_cell(0, "status").unwrap(), CellValue::from("in-process"));
    }

    #[test]
    fn commit_policy_writes_replaced_session() {
        let mut store = GridStore::initialize();
        let mut ctl = EditController::new(ReplacePolicy::Commit);
        ctl.begin_edit(&mut store, 0, "status").unwrap();
        ctl.update_buffer("kept");
        ctl.begin_edit(&mut store, 1, "priority").unwrap();

        assert_eq!(store.get_cell(0, "status").unwrap(), CellValue::from("kept"));
        assert!(ctl.is_editing_cell(1, "priority"));
    }

    #[test]
    fn invalid_begin_keeps_current_session() {
        let (mut store, mut ctl) = setup();
        ctl.begin_edit(&mut store, 2, "url").unwrap();
        ctl.update_buffer("draft");

        let err = ctl.begin_edit(&mut store, 99, "url").unwrap_err();
        assert_eq!(err, SheetError::RowOutOfBounds { index: 99, len: 25 });
        assert_eq!(ctl.session().unwrap().buffer(), "draft");
    }

    #[test]
    fn commit_only_touches_session_cell() {
        let (mut store, mut ctl) = setup();
        let before = store.clone();
        ctl.begin_edit(&mut store, 3, "due-date").unwrap();
        ctl.update_buffer("tomorrow-ish");
        ctl.commit(&mut store).unwrap();

        for r in 0..store.row_count() {
            for col in store.columns() {
                if r == 3 && col.key == "due-date" {
                    continue;
                }
                assert_eq!(store.get_cell(r, col.key), before.get_cell(r, col.key));
            }
        }
    }

    #[test]
    fn keystrokes_edit_at_caret() {
        let (mut store, mut ctl) = setup();
        ctl.begin_edit(&mut store, 5, "est-value").unwrap();
        for c in "12₹".chars() {
            ctl.insert_char(c);
        }
        ctl.caret_left();
        ctl.insert_char('0');
        assert_eq!(ctl.session().unwrap().buffer(), "120₹");

        ctl.caret_home();
        ctl.delete();
        ctl.caret_end();
        ctl.backspace();
        assert_eq!(ctl.session().unwrap().buffer(), "20");

        ctl.caret_home();
        ctl.backspace();
        ctl.caret_right();
        ctl.caret_right();
        ctl.caret_right();
        assert_eq!(ctl.session().unwrap().caret(), 2);
    }

    #[test]
    fn free_text_is_not_coerced() {
        let (mut store, mut ctl) = setup();
        ctl.begin_edit(&mut store, 0, "due-date").unwrap();
        ctl.update_buffer("not a date");
        ctl.commit(&mut store).unwrap();
        assert_eq!(
            store.get_cell(0, "due-date").unwrap(),
            CellValue::Text("not a date".to_string())
        );
    }

    #[test]
    fn replace_policy_parsing() {
        assert_eq!(ReplacePolicy::from_str("COMMIT"), ReplacePolicy::Commit);
        assert_eq!(ReplacePolicy::from_str("discard"), ReplacePolicy::Discard);
        assert_eq!(ReplacePolicy::from_str("bogus"), ReplacePolicy::Discard);
    }
}
