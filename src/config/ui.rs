//! Interface and editing behavior settings

use crate::sheet::ReplacePolicy;
use serde::Deserialize;

/// Terminal interface settings
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Capture mouse events (click to select, double-click to edit)
    pub mouse: bool,
    /// Maximum gap between two clicks on the same cell to count as a double-click
    pub double_click_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            double_click_ms: 400,
        }
    }
}

/// UI settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub mouse: Option<bool>,
    pub double_click_ms: Option<u64>,
}

impl UiConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            mouse: file.mouse.unwrap_or(defaults.mouse),
            double_click_ms: file.double_click_ms.unwrap_or(defaults.double_click_ms),
        }
    }
}

/// Cell editing settings
#[derive(Debug, Clone, Default)]
pub struct EditingConfig {
    /// What happens to an unsaved edit when the editor moves to another cell
    pub replace_policy: ReplacePolicy,
}

/// Editing settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileEditing {
    pub replace_policy: Option<String>,
}

impl EditingConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileEditing>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            replace_policy: file
                .replace_policy
                .map(|s| ReplacePolicy::from_str(&s))
                .unwrap_or_default(),
        }
    }
}
