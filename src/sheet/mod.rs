//! Sheet model - the in-memory data behind the grid
//!
//! Three pieces of state, all UI-agnostic:
//! - [`GridStore`]: rows and the fixed column schema (single writer: `set_cell`)
//! - [`EditController`]: the one-cell-at-a-time edit session state machine
//! - [`TabSelector`]: which footer tab is active (presentational only)
//!
//! The TUI owns one of each and routes user input through them.

mod classify;
mod column;
mod seed;
mod session;
mod store;
mod tabs;

pub use classify::{classify_priority, classify_status, PriorityCategory, StatusCategory};
pub use column::{ColumnDef, COLUMNS};
pub use session::{EditController, ReplacePolicy};
pub use store::{CellValue, GridStore};
pub use tabs::{Tab, TabSelector};

use thiserror::Error;

/// Errors raised by the sheet model
///
/// These are contract violations by the caller (bad coordinates, labels that
/// are not part of the closed tab set), never user-facing conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error("row index {index} out of bounds (row count {len})")]
    RowOutOfBounds { index: usize, len: usize },

    #[error("unknown column key '{0}'")]
    UnknownColumn(String),

    #[error("unknown tab label '{0}'")]
    UnknownTab(String),
}
