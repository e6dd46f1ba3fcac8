//! Configuration for the sheet application
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/ordersheet/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Only interface behavior is configurable. Sheet contents are never persisted.

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;
mod ui;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use ui::{EditingConfig, FileEditing, FileUi, UiConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
const DEFAULT_THEME: &str = "Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Nord", "Dracula"
    pub theme: String,

    /// Terminal interface settings
    pub ui: UiConfig,

    /// Cell editing behavior
    pub editing: EditingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            ui: UiConfig::default(),
            editing: EditingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [ui] section
    pub ui: Option<FileUi>,

    /// Optional [editing] section
    pub editing: Option<FileEditing>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/ordersheet/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("ordersheet").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Never panics, but exits the process if the config file exists and
    /// cannot be parsed. A broken config should fail fast with a clear error,
    /// not silently fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `ordersheet config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with environment overrides
    ///
    /// `env` looks up a variable by name; split out so tests don't touch the
    /// process environment.
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("ORDERSHEET_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let ui = UiConfig::from_file(file.ui);
        let editing = EditingConfig::from_file(file.editing);

        // Log directory: env > file > default
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(dir) = env("ORDERSHEET_LOG_DIR") {
            logging.file_dir = PathBuf::from(dir);
        }

        Self {
            theme,
            ui,
            editing,
            logging,
        }
    }
}
