// ordersheet - Terminal spreadsheet for tracking orders
//
// A single-screen sheet: header, inert toolbar, an editable grid of order
// rows and a footer tab strip. Data lives in memory only.
//
// Architecture:
// - Sheet: grid store, edit session controller, tab selector (UI-agnostic)
// - TUI (ratatui): renders the sheet and maps keys/mouse onto sheet operations
// - Config: env > ~/.config/ordersheet/config.toml > defaults
// - Logging: tracing into an in-memory buffer (TUI) or stderr (CLI), plus optional files

mod cli;
mod config;
mod logging;
mod sheet;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before the config file is loaded
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        cli::handle_config(show, reset, path);
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let tui_mode = cli.command.is_none();
    let _file_guard = init_tracing(&config, &log_buffer, tui_mode);

    match cli.command {
        Some(Commands::Dump { json }) => cli::handle_dump(json),
        Some(Commands::Config { .. }) => Ok(()),
        None => tui::run_tui(log_buffer, config),
    }
}

/// Initialize tracing/logging
///
/// In TUI mode: capture logs to buffer (prevents garbling the display)
/// In CLI mode: write logs to stderr so stdout stays clean for output
/// File logging: optionally write JSON lines to rotating files (in addition to above)
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: &LogBuffer, tui_mode: bool) -> Option<WorkerGuard> {
    let default_filter = format!("ordersheet={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_writer, guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    // File layer uses JSON format for structured log parsing
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });
    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling file appender wrapped in a non-blocking writer (writes happen in background thread)
///
/// Returns None when file logging is off or the log directory cannot be created.
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(file_appender))
}
