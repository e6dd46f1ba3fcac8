// TUI application state
//
// Owns the sheet (store, edit controller, tab selector) together with the
// interface state around it: cursor, scroll offsets, theme, toast and the
// click geometry recorded by the last render.

use super::buttons::Button;
use super::components::Toast;
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::sheet::{ColumnDef, EditController, GridStore, Tab, TabSelector, COLUMNS};
use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Width of the row-number gutter, not counting its separator
pub const GUTTER_WIDTH: u16 = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Click geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal placement of one visible column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Index into `COLUMNS`
    pub index: usize,
    pub x: u16,
    pub width: u16,
}

/// Lay out columns starting at `first`, left to right, into `width` cells at `x`
///
/// Each column is followed by a one-cell separator. The last column that
/// starts inside the area is clipped rather than dropped.
pub fn layout_columns(first: usize, x: u16, width: u16) -> Vec<ColumnSpan> {
    let end = x.saturating_add(width);
    let mut spans = Vec::new();
    let mut left = x;

    for (index, col) in COLUMNS.iter().enumerate().skip(first) {
        if left >= end {
            break;
        }
        let w = col.char_width().min(end - left);
        spans.push(ColumnSpan { index, x: left, width: w });
        left = left.saturating_add(w + 1);
    }

    spans
}

/// Screen regions recorded during render, used to resolve mouse clicks
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Data rows of the grid, below the column header line
    pub body: Rect,
    pub columns: Vec<ColumnSpan>,
    pub first_row: usize,
    pub tabs: Vec<(Rect, Tab)>,
    pub buttons: Vec<(Rect, Button)>,
}

impl HitMap {
    /// Row index and column index under the pointer
    pub fn cell_at(&self, x: u16, y: u16, row_count: usize) -> Option<(usize, usize)> {
        if !self.body.contains(Position::new(x, y)) {
            return None;
        }
        let row = self.first_row + (y - self.body.y) as usize;
        if row >= row_count {
            return None;
        }
        let col = self
            .columns
            .iter()
            .find(|c| x >= c.x && x < c.x + c.width)?;
        Some((row, col.index))
    }

    pub fn tab_at(&self, x: u16, y: u16) -> Option<Tab> {
        self.tabs
            .iter()
            .find(|(area, _)| area.contains(Position::new(x, y)))
            .map(|(_, tab)| *tab)
    }

    pub fn button_at(&self, x: u16, y: u16) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(area, _)| area.contains(Position::new(x, y)))
            .map(|(_, button)| *button)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App
// ─────────────────────────────────────────────────────────────────────────────

/// Main application state for the TUI
pub struct App {
    /// Sheet contents
    pub store: GridStore,

    /// The single in-place edit, if any
    pub editor: EditController,

    /// Footer tab selection
    pub tabs: TabSelector,

    /// Selected cell: row index and index into `COLUMNS`
    pub cursor_row: usize,
    pub cursor_col: usize,

    /// First visible row and column
    pub row_offset: usize,
    pub col_offset: usize,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Log buffer feeding the status bar
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Click geometry from the last frame
    pub hitmap: HitMap,

    /// Two clicks on the same cell within this window begin an edit
    double_click: Duration,

    /// Previous cell click, for double-click detection
    last_click: Option<(Instant, usize, usize)>,

    /// Input handler for debounced action keys
    input_handler: InputHandler,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(LogBuffer::new(), &Config::default())
    }

    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, using Dark");
            ThemeKind::default()
        });

        Self {
            store: GridStore::initialize(),
            editor: EditController::new(config.editing.replace_policy),
            tabs: TabSelector::new(),
            cursor_row: 0,
            cursor_col: 0,
            row_offset: 0,
            col_offset: 0,
            theme_kind,
            theme: theme_kind.theme(),
            show_help: false,
            toast: None,
            log_buffer,
            should_quit: false,
            hitmap: HitMap::default(),
            double_click: Duration::from_millis(config.ui.double_click_ms),
            last_click: None,
            input_handler: InputHandler::default(),
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Column definition under the cursor
    pub fn current_column(&self) -> &'static ColumnDef {
        &COLUMNS[self.cursor_col]
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the cursor by a row/column delta, clamped to the sheet
    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let last_row = self.store.row_count().saturating_sub(1);
        let last_col = COLUMNS.len() - 1;
        self.cursor_row = self.cursor_row.saturating_add_signed(rows).min(last_row);
        self.cursor_col = self.cursor_col.saturating_add_signed(cols).min(last_col);
    }

    /// Select a cell; an edit open on another cell loses focus and commits
    pub fn select_cell(&mut self, row: usize, col: usize) {
        let key = COLUMNS[col].key;
        if self.editor.is_editing() && !self.editor.is_editing_cell(row, key) {
            self.commit_edit();
        }
        self.cursor_row = row.min(self.store.row_count().saturating_sub(1));
        self.cursor_col = col.min(COLUMNS.len() - 1);
    }

    /// Adjust the row offset so the cursor stays inside `height` visible rows
    pub fn scroll_rows_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor_row < self.row_offset {
            self.row_offset = self.cursor_row;
        } else if self.cursor_row >= self.row_offset + height {
            self.row_offset = self.cursor_row + 1 - height;
        }
        let max_offset = self.store.row_count().saturating_sub(height);
        self.row_offset = self.row_offset.min(max_offset);
    }

    /// Adjust the column offset so the cursor column is fully visible in `width` cells
    pub fn scroll_columns_into_view(&mut self, width: u16) {
        if self.cursor_col < self.col_offset {
            self.col_offset = self.cursor_col;
        }
        while self.col_offset < self.cursor_col {
            let spans = layout_columns(self.col_offset, 0, width);
            let fits = spans
                .iter()
                .any(|s| s.index == self.cursor_col && s.width == COLUMNS[s.index].char_width());
            if fits {
                break;
            }
            self.col_offset += 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Open an edit on the cursor cell
    pub fn begin_edit(&mut self) {
        let key = self.current_column().key;
        if let Err(e) = self.editor.begin_edit(&mut self.store, self.cursor_row, key) {
            tracing::warn!("Cannot edit cell: {}", e);
            self.show_toast(format!("✗ {}", e));
        }
    }

    /// Reopen the editor `rows` away in the same column
    ///
    /// The open session is replaced by the controller, so the configured
    /// replace policy decides what happens to its unsaved text. At the edge
    /// of the sheet nothing changes.
    pub fn edit_adjacent(&mut self, rows: isize) {
        if !self.editor.is_editing() {
            return;
        }
        let from = self.cursor_row;
        self.move_cursor(rows, 0);
        if self.cursor_row != from {
            self.begin_edit();
        }
    }

    /// Write the buffer back to the store
    pub fn commit_edit(&mut self) {
        match self.editor.commit(&mut self.store) {
            Ok(Some(coord)) => tracing::debug!(cell = %coord, "Committed"),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Commit failed: {}", e);
                self.show_toast(format!("✗ {}", e));
            }
        }
    }

    /// Drop the buffer without writing
    pub fn cancel_edit(&mut self) {
        if let Some(coord) = self.editor.cancel() {
            tracing::debug!(cell = %coord, "Cancelled");
        }
    }

    /// Terminal lost focus: the edit surface blurs
    pub fn focus_lost(&mut self) {
        self.commit_edit();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve a left click against the last frame's geometry
    pub fn click(&mut self, x: u16, y: u16, now: Instant) {
        if let Some((row, col)) = self.hitmap.cell_at(x, y, self.store.row_count()) {
            self.click_cell(row, col, now);
            return;
        }

        // Anything outside the grid takes focus away from the editor
        self.last_click = None;
        self.commit_edit();

        if let Some(tab) = self.hitmap.tab_at(x, y) {
            self.tabs.select_tab(tab);
        } else if let Some(button) = self.hitmap.button_at(x, y) {
            button.press();
        }
    }

    /// Single click selects, a second click on the same cell in time edits
    pub fn click_cell(&mut self, row: usize, col: usize, now: Instant) {
        if self.editor.is_editing_cell(row, COLUMNS[col].key) {
            return;
        }

        let is_double = matches!(
            self.last_click,
            Some((at, r, c)) if r == row && c == col && now.duration_since(at) <= self.double_click
        );

        self.select_cell(row, col);

        if is_double {
            self.last_click = None;
            self.begin_edit();
        } else {
            self.last_click = Some((now, row, col));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Misc actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Text of the cursor cell, for the clipboard
    pub fn copy_cell(&self) -> Option<String> {
        self.store
            .display_value(self.cursor_row, self.current_column().key)
            .ok()
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Clear expired toast (called on each render)
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{CellValue, ReplacePolicy};

    fn col(key: &str) -> usize {
        COLUMNS.iter().position(|c| c.key == key).unwrap()
    }

    /// Grid body starting at y=10, 20 rows tall, columns laid out from the first one
    fn with_hitmap(app: &mut App) {
        app.hitmap = HitMap {
            body: Rect::new(0, 10, 120, 20),
            columns: layout_columns(0, GUTTER_WIDTH + 1, 115),
            first_row: 0,
            tabs: vec![
                (Rect::new(0, 40, 12, 1), Tab::AllOrders),
                (Rect::new(12, 40, 9, 1), Tab::Pending),
            ],
            buttons: vec![(Rect::new(100, 2, 7, 1), Button::Share)],
        };
    }

    #[test]
    fn layout_columns_clips_last_column() {
        let spans = layout_columns(0, 0, 40);
        assert_eq!(spans[0], ColumnSpan { index: 0, x: 0, width: 25 });
        assert_eq!(spans[1], ColumnSpan { index: 1, x: 26, width: 12 });
        assert_eq!(spans[2], ColumnSpan { index: 2, x: 39, width: 1 });
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = App::new();
        app.move_cursor(-3, -3);
        assert_eq!((app.cursor_row, app.cursor_col), (0, 0));
        app.move_cursor(100, 100);
        assert_eq!((app.cursor_row, app.cursor_col), (24, 8));
    }

    #[test]
    fn rows_scroll_to_keep_cursor_visible() {
        let mut app = App::new();
        app.cursor_row = 15;
        app.scroll_rows_into_view(10);
        assert_eq!(app.row_offset, 6);

        app.cursor_row = 2;
        app.scroll_rows_into_view(10);
        assert_eq!(app.row_offset, 2);
    }

    #[test]
    fn columns_scroll_until_cursor_fits() {
        let mut app = App::new();
        app.cursor_col = col("est-value");
        app.scroll_columns_into_view(40);
        let spans = layout_columns(app.col_offset, 0, 40);
        let last = spans.iter().find(|s| s.index == app.cursor_col).unwrap();
        assert_eq!(last.width, 15);

        app.cursor_col = 0;
        app.scroll_columns_into_view(40);
        assert_eq!(app.col_offset, 0);
    }

    #[test]
    fn single_click_selects_double_click_edits() {
        let mut app = App::new();
        with_hitmap(&mut app);
        let t0 = Instant::now();
        let status = app.hitmap.columns[col("status")];

        app.click(status.x, 10, t0);
        assert_eq!((app.cursor_row, app.cursor_col), (0, col("status")));
        assert!(!app.editor.is_editing());

        app.click(status.x + 1, 10, t0 + Duration::from_millis(100));
        assert!(app.editor.is_editing_cell(0, "status"));
        assert_eq!(app.editor.session().unwrap().buffer(), "in-process");
    }

    #[test]
    fn slow_second_click_does_not_edit() {
        let mut app = App::new();
        with_hitmap(&mut app);
        let t0 = Instant::now();

        app.click_cell(1, 0, t0);
        app.click_cell(1, 0, t0 + Duration::from_millis(900));
        assert!(!app.editor.is_editing());
    }

    #[test]
    fn clicking_another_cell_commits_the_edit() {
        let mut app = App::new();
        app.cursor_col = col("priority");
        app.begin_edit();
        app.editor.update_buffer("High");

        app.click_cell(3, 0, Instant::now());

        assert!(!app.editor.is_editing());
        assert_eq!(
            app.store.get_cell(0, "priority").unwrap(),
            CellValue::from("High")
        );
        assert_eq!(app.cursor_row, 3);
    }

    #[test]
    fn clicking_a_tab_selects_it_and_commits() {
        let mut app = App::new();
        with_hitmap(&mut app);
        app.begin_edit();
        app.editor.update_buffer("Renamed");

        app.click(13, 40, Instant::now());

        assert_eq!(app.tabs.active(), Tab::Pending);
        assert_eq!(app.store.display_value(0, "job-request").unwrap(), "Renamed");
    }

    #[test]
    fn clicking_inside_the_editing_cell_keeps_editing() {
        let mut app = App::new();
        app.begin_edit();
        app.editor.update_buffer("draft");
        app.click_cell(0, 0, Instant::now());
        assert_eq!(app.editor.session().unwrap().buffer(), "draft");
    }

    #[test]
    fn focus_loss_commits() {
        let mut app = App::new();
        app.cursor_row = 7;
        app.begin_edit();
        app.editor.update_buffer("late entry");
        app.focus_lost();
        assert!(!app.editor.is_editing());
        assert_eq!(app.store.display_value(7, "job-request").unwrap(), "late entry");
    }

    #[test]
    fn configured_policy_reaches_the_controller() {
        let mut config = Config::default();
        config.editing.replace_policy = ReplacePolicy::Commit;
        config.theme = "nord".to_string();
        let app = App::with_config(LogBuffer::new(), &config);
        assert_eq!(app.editor.policy(), ReplacePolicy::Commit);
        assert_eq!(app.theme_kind, ThemeKind::Nord);
    }

    #[test]
    fn moving_the_editor_discards_by_default() {
        let mut app = App::new();
        app.cursor_col = col("assigned");
        app.begin_edit();
        app.editor.update_buffer("Nobody");

        app.edit_adjacent(1);

        assert!(app.editor.is_editing_cell(1, "assigned"));
        assert_eq!(app.editor.session().unwrap().buffer(), "Tejas Pandey");
        assert_eq!(app.store.display_value(0, "assigned").unwrap(), "Sophie Choudury");
    }

    #[test]
    fn moving_the_editor_commits_under_commit_policy() {
        let mut config = Config::default();
        config.editing.replace_policy = ReplacePolicy::Commit;
        let mut app = App::with_config(LogBuffer::new(), &config);
        app.cursor_row = 1;
        app.cursor_col = col("assigned");
        app.begin_edit();
        app.editor.update_buffer("Nobody");

        app.edit_adjacent(-1);

        assert!(app.editor.is_editing_cell(0, "assigned"));
        assert_eq!(app.store.display_value(1, "assigned").unwrap(), "Nobody");
    }

    #[test]
    fn moving_the_editor_past_the_edge_keeps_the_buffer() {
        let mut app = App::new();
        app.begin_edit();
        app.editor.update_buffer("draft");
        app.edit_adjacent(-1);
        assert!(app.editor.is_editing_cell(0, "job-request"));
        assert_eq!(app.editor.session().unwrap().buffer(), "draft");
    }

    #[test]
    fn copy_reads_the_cursor_cell() {
        let mut app = App::new();
        app.cursor_row = 1;
        app.cursor_col = col("submitter");
        assert_eq!(app.copy_cell().as_deref(), Some("Irfan Khan"));
    }
}
