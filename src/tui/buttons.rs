// Inert header, toolbar and column header buttons
//
// None of these change sheet state. Pressing one only records the click in
// the log, so the buttons exist for layout and discoverability.

use crate::sheet::COLUMNS;

/// Every clickable element that only logs its click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    // Header
    MoreOptions,
    UserOptions,
    NewAction,

    // Toolbar
    ToolBar,
    HideFields,
    Filter,
    Sort,
    CellView,
    Abc,
    AnswerQuestion,
    Extract,
    Import,
    Export,
    Share,

    // Grid
    ColumnHeader(usize),

    // Footer
    AddTab,
}

/// Toolbar buttons, left to right
pub const TOOLBAR: [Button; 11] = [
    Button::ToolBar,
    Button::HideFields,
    Button::Filter,
    Button::Sort,
    Button::CellView,
    Button::Abc,
    Button::AnswerQuestion,
    Button::Extract,
    Button::Import,
    Button::Export,
    Button::Share,
];

impl Button {
    /// Name recorded in the click log
    pub fn name(&self) -> String {
        let name = match self {
            Button::MoreOptions => "More Options",
            Button::UserOptions => "User Options",
            Button::NewAction => "New Action",
            Button::ToolBar => "Tool bar",
            Button::HideFields => "Hide fields",
            Button::Filter => "Filter",
            Button::Sort => "Sort",
            Button::CellView => "Cell view",
            Button::Abc => "ABC dropdown",
            Button::AnswerQuestion => "Answer a question dropdown",
            Button::Extract => "Extract dropdown",
            Button::Import => "Import",
            Button::Export => "Export",
            Button::Share => "Share",
            Button::AddTab => "Add Tab",
            Button::ColumnHeader(index) => {
                return COLUMNS
                    .get(*index)
                    .map(|c| format!("Column Header: {}", c.label))
                    .unwrap_or_default();
            }
        };
        name.to_string()
    }

    /// Text drawn on screen
    pub fn label(&self) -> &'static str {
        match self {
            Button::MoreOptions => "⋯",
            Button::UserOptions => "▾",
            Button::NewAction => "+ New Action",
            Button::ToolBar => "Tool bar »",
            Button::HideFields => "Hide fields",
            Button::Filter => "Filter",
            Button::Sort => "Sort",
            Button::CellView => "Cell view",
            Button::Abc => "ABC ▾",
            Button::AnswerQuestion => "Answer a question ▾",
            Button::Extract => "Extract ▾",
            Button::Import => "Import",
            Button::Export => "Export",
            Button::Share => "Share",
            Button::AddTab => "+",
            Button::ColumnHeader(index) => COLUMNS.get(*index).map_or("", |c| c.label),
        }
    }

    /// Short label for narrow terminals
    pub fn short_label(&self) -> &'static str {
        match self {
            Button::ToolBar => "»",
            Button::HideFields => "Hide",
            Button::CellView => "View",
            Button::AnswerQuestion => "Ask ▾",
            Button::NewAction => "+ New",
            other => other.label(),
        }
    }

    /// Record the click
    pub fn press(&self) {
        tracing::info!("Button clicked: {}", self.name());
    }
}
