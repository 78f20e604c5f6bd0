//! Tests for configuration loading
//!
//! Covers TOML parsing, the project config search, and the options handed to
//! the extractor.

use std::fs;
use std::path::PathBuf;

use mdsplit::config::{Config, ConfigError, ConfigSource};
use mdsplit::paths::{PROJECT_CONFIG, find_project_config};
use tempfile::TempDir;

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.extract.extension, "md");
    assert!(config.extract.folder.is_none());
}

#[test]
fn test_parse_extract_section() {
    let config = Config::parse(
        r#"
[extract]
extension = "markdown"
folder = "extracted"
"#,
    )
    .unwrap();

    assert_eq!(config.extract.extension, "markdown");
    assert_eq!(config.extract.folder, Some(PathBuf::from("extracted")));
}

#[test]
fn test_parse_rejects_wrong_types() {
    assert!(Config::parse("[extract]\nextension = 3").is_err());
}

#[test]
fn test_extract_options_strip_leading_dot() {
    let config = Config::parse("[extract]\nextension = \".txt\"").unwrap();
    let options = config.extract_options();
    assert_eq!(options.extension, "txt");
    assert!(options.folder.is_none());
}

#[test]
fn test_empty_extension_uses_default() {
    let config = Config::parse("[extract]\nextension = \"\"").unwrap();
    assert_eq!(config.extract_options().extension, "md");

    let config = Config::parse("[extract]\nextension = \"..\"").unwrap();
    assert_eq!(config.extract_options().extension, "md");
}

#[test]
fn test_to_toml_round_trips() {
    let config = Config::parse("[extract]\nfolder = \"out\"").unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(Config::parse(&text).unwrap(), config);
}

// =============================================================================
// Discovery Tests
// =============================================================================

#[test]
fn test_find_project_config_walks_up() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG), "").unwrap();
    let nested = dir.path().join("journal").join("2024");
    fs::create_dir_all(&nested).unwrap();
    let doc = nested.join("notes.md");
    fs::write(&doc, "# Notes").unwrap();

    assert_eq!(find_project_config(&doc), Some(dir.path().join(PROJECT_CONFIG)));
}

#[test]
fn test_find_project_config_stops_at_repo_root() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG), "").unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();

    assert_eq!(find_project_config(&repo), None);
}

#[test]
fn test_load_for_prefers_project_config() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG), "[extract]\nfolder = \"split\"").unwrap();
    let doc = dir.path().join("Physics.md");
    fs::write(&doc, "# Physics").unwrap();

    let (config, source) = Config::load_for(&doc).unwrap();

    assert_eq!(config.extract.folder, Some(PathBuf::from("split")));
    assert!(matches!(source, ConfigSource::Project(path) if path.ends_with(PROJECT_CONFIG)));
}

#[test]
fn test_load_for_reports_broken_config() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG), "[extract\n").unwrap();
    let doc = dir.path().join("Physics.md");
    fs::write(&doc, "# Physics").unwrap();

    let err = Config::load_for(&doc).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
