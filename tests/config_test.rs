//! Tests for configuration loading.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use rewind_games::{AppConfig, Cli};
use rewind_tictactoe::SortOrder;

fn cli_for(config: &std::path::Path, extra: &[&str]) -> Cli {
    let mut args = vec![
        "rewind_games".to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::parse_from(args)
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cli = cli_for(&dir.path().join("absent.toml"), &[]);
    let config = AppConfig::load(&cli).expect("Load failed");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("rewind_games.log"));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_file_values_are_read() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rewind_games.toml");
    fs::write(
        &path,
        r#"log_file = "game.log"
log_filter = "debug"
sort_order = "descending"
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Parse failed");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.sort_order(), SortOrder::Descending);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("partial.toml");
    fs::write(&path, "sort_order = \"descending\"\n").expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Parse failed");
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.sort_order(), SortOrder::Descending);
}

#[test]
fn test_cli_overrides_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rewind_games.toml");
    fs::write(&path, "log_filter = \"debug\"\n").expect("Failed to write TOML");

    let cli = cli_for(&path, &["--log-filter", "warn", "--log-file", "other.log"]);
    let config = AppConfig::load(&cli).expect("Load failed");
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}

#[test]
fn test_invalid_file_reports_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "sort_order = \"sideways\"\n").expect("Failed to write TOML");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
