// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. Subcommands:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path
// - dump [--json]: Print the initial sheet

use crate::config::{Config, VERSION};
use crate::sheet::{CellValue, ColumnDef, GridStore};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// ordersheet - Terminal spreadsheet for tracking orders
#[derive(Parser)]
#[command(name = "ordersheet")]
#[command(version = VERSION)]
#[command(about = "Terminal spreadsheet for tracking orders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Print the initial sheet and exit
    Dump {
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

/// Handle `config` flags. Runs before the config file is loaded so a broken
/// file can still be inspected and reset.
pub fn handle_config(show: bool, reset: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: ordersheet config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!();
    println!("[ui]");
    println!("mouse = {}", config.ui.mouse);
    println!("double_click_ms = {}", config.ui.double_click_ms);
    println!();
    println!("[editing]");
    println!("replace_policy = {:?}", config.editing.replace_policy.as_str());
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

// ─────────────────────────────────────────────────────────────────────────────
// dump
// ─────────────────────────────────────────────────────────────────────────────

/// JSON shape of a dump: `values` follow the order of `columns`
#[derive(Serialize)]
struct SheetDump<'a> {
    columns: &'a [ColumnDef],
    rows: Vec<RowDump>,
}

#[derive(Serialize)]
struct RowDump {
    id: u32,
    values: Vec<CellValue>,
}

/// Print the freshly initialized sheet to stdout
pub fn handle_dump(json: bool) -> Result<()> {
    let store = GridStore::initialize();
    tracing::debug!(rows = store.row_count(), json, "Dumping sheet");

    let out = if json {
        dump_json(&store)?
    } else {
        dump_table(&store)
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", out).context("Failed to write to stdout")?;
    Ok(())
}

pub fn dump_json(store: &GridStore) -> Result<String> {
    let columns = store.columns();
    let dump = SheetDump {
        columns,
        rows: store
            .rows()
            .iter()
            .map(|row| RowDump {
                id: row.id,
                values: columns.iter().map(|c| row.get(c.key)).collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&dump).context("Failed to serialize sheet")
}

/// Aligned text table: an id column, then one column per schema entry
pub fn dump_table(store: &GridStore) -> String {
    let columns = store.columns();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(store.row_count() + 1);
    grid.push(
        std::iter::once("#".to_string())
            .chain(columns.iter().map(|c| c.label.to_string()))
            .collect(),
    );
    for row in store.rows() {
        grid.push(
            std::iter::once(row.id.to_string())
                .chain(columns.iter().map(|c| row.get(c.key).to_string()))
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..=columns.len())
        .map(|i| grid.iter().map(|line| line[i].width()).max().unwrap_or(0))
        .collect();

    grid.iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - cell.width())))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
