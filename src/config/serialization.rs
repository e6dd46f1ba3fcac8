//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# ordersheet configuration

# Theme: Dark, Light, Nord, Dracula (press 't' in the TUI to cycle)
theme = "{theme}"

# Terminal interface
[ui]
# Click to select a cell, double-click to edit it
mouse = {mouse}
# Two clicks on the same cell within this window count as a double-click
double_click_ms = {double_click_ms}

# Cell editing
[editing]
# What happens to an unsaved edit when Up/Down moves the editor to another cell:
#   "discard" - drop the unsaved text (default)
#   "commit"  - save it first
replace_policy = "{replace_policy}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app log line)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            mouse = self.ui.mouse,
            double_click_ms = self.ui.double_click_ms,
            replace_policy = self.editing.replace_policy.as_str(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
