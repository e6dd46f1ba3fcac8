//! Configuration tests
//!
//! These tests guard the config file format: when a field is added to
//! `Config`, the TOML template and the file layer must follow.

use super::*;
use crate::sheet::ReplacePolicy;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("config should parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the generated template parses back into the same values
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.ui.mouse, config.ui.mouse);
    assert_eq!(resolved.ui.double_click_ms, config.ui.double_click_ms);
    assert_eq!(resolved.editing.replace_policy, config.editing.replace_policy);
    assert_eq!(resolved.logging.level, config.logging.level);
    assert_eq!(resolved.logging.file_rotation, config.logging.file_rotation);
    assert_eq!(resolved.logging.file_dir, config.logging.file_dir);
}

#[test]
fn test_config_roundtrip_modified() {
    let mut config = Config::default();
    config.theme = "Nord".to_string();
    config.ui.mouse = false;
    config.editing.replace_policy = ReplacePolicy::Commit;
    config.logging.file_rotation = LogRotation::Never;

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(resolved.theme, "Nord");
    assert!(!resolved.ui.mouse);
    assert_eq!(resolved.editing.replace_policy, ReplacePolicy::Commit);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::resolve(parse(""), no_env);
    assert_eq!(config.theme, "Dark");
    assert_eq!(config.ui.double_click_ms, 400);
    assert_eq!(config.editing.replace_policy, ReplacePolicy::Discard);
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "Light"

[logging]
file_dir = "/var/log/sheet"
"#,
    );
    let env = |key: &str| match key {
        "ORDERSHEET_THEME" => Some("Dracula".to_string()),
        "ORDERSHEET_LOG_DIR" => Some("/tmp/sheet-logs".to_string()),
        _ => None,
    };

    let config = Config::resolve(file, env);
    assert_eq!(config.theme, "Dracula");
    assert_eq!(config.logging.file_dir, PathBuf::from("/tmp/sheet-logs"));
}

#[test]
fn test_partial_sections() {
    let config = Config::resolve(
        parse(
            r#"
[ui]
double_click_ms = 250

[editing]
replace_policy = "COMMIT"
"#,
        ),
        no_env,
    );
    assert!(config.ui.mouse);
    assert_eq!(config.ui.double_click_ms, 250);
    assert_eq!(config.editing.replace_policy, ReplacePolicy::Commit);
}

#[test]
fn test_unknown_enum_values_fall_back() {
    let config = Config::resolve(
        parse(
            r#"
[editing]
replace_policy = "merge"

[logging]
file_rotation = "weekly"
"#,
        ),
        no_env,
    );
    assert_eq!(config.editing.replace_policy, ReplacePolicy::Discard);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_type_errors_are_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("[ui]\nmouse = \"yes\"\n");
    assert!(parsed.is_err());
}
