//! Integration tests for the mdsplit CLI
//!
//! Each test builds a small notes folder in a temp directory and runs the
//! binary against it, checking both the printed output and the files left
//! on disk.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PHYSICS: &str = "# Title\n## Temp Scales\nSome text\n### Kelvin\nMore\n## Other";

const PHYSICS_AFTER: &str =
    "# Title\n## Temp Scales\n![[Temp Scales.md | no-h1 no-title no-inline-title ]]\n## Other";

/// Helper function to create an mdsplit command
fn mdsplit() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("mdsplit"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Helper to create a notes folder with one document
///
/// The `.git` marker keeps config discovery inside the temp dir.
fn setup_notes(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    let doc = dir.path().join("Physics.md");
    fs::write(&doc, content).unwrap();
    (dir, doc)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_help() {
    mdsplit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract a Markdown heading section"));
}

#[test]
fn test_version() {
    mdsplit()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("mdsplit v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_json() {
    mdsplit()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_extract_requires_target() {
    let (_dir, doc) = setup_notes(PHYSICS);
    mdsplit().arg("extract").arg(&doc).assert().failure();
    assert_eq!(read(&doc), PHYSICS);
}

#[test]
fn test_extract_rejects_both_targets() {
    let (_dir, doc) = setup_notes(PHYSICS);
    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--line", "2", "--heading", "Temp Scales"])
        .assert()
        .failure();
}

// =============================================================================
// EXTRACT
// =============================================================================

#[test]
fn test_extract_by_line() {
    let (dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--line", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted heading into Temp Scales.md"));

    assert_eq!(read(&dir.path().join("Temp Scales.md")), "# Temp Scales\nSome text\n## Kelvin\nMore");
    assert_eq!(read(&doc), PHYSICS_AFTER);
}

#[test]
fn test_extract_by_heading_title() {
    let (dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--heading", "Kelvin"])
        .assert()
        .success();

    assert_eq!(read(&dir.path().join("Kelvin.md")), "# Kelvin\nMore");
    assert_eq!(
        read(&doc),
        "# Title\n## Temp Scales\nSome text\n### Kelvin\n![[Kelvin.md | no-h1 no-title no-inline-title ]]\n## Other"
    );
}

#[test]
fn test_extract_heading_without_body() {
    let (dir, doc) = setup_notes("# A\n# B");

    mdsplit().arg("extract").arg(&doc).args(["-l", "1"]).assert().success();

    assert_eq!(read(&dir.path().join("A.md")), "# A");
    assert_eq!(read(&doc), "# A\n![[A.md | no-h1 no-title no-inline-title ]]\n# B");
}

#[test]
fn test_extract_sanitizes_note_name() {
    let (dir, doc) = setup_notes("# Q&A: what/why?\nanswer");

    mdsplit().arg("extract").arg(&doc).args(["--line", "1"]).assert().success();

    assert_eq!(read(&dir.path().join("Q&A whatwhy.md")), "# Q&A: what/why?\nanswer");
}

#[test]
fn test_extract_conflict_leaves_files_untouched() {
    let (dir, doc) = setup_notes(PHYSICS);
    let existing = dir.path().join("Temp Scales.md");
    fs::write(&existing, "already here").unwrap();

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--line", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("It might already exist."));

    assert_eq!(read(&doc), PHYSICS);
    assert_eq!(read(&existing), "already here");
}

#[test]
fn test_extract_not_a_heading() {
    let (_dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--line", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a valid heading line."));

    assert_eq!(read(&doc), PHYSICS);
}

#[test]
fn test_extract_line_out_of_range() {
    let (_dir, doc) = setup_notes(PHYSICS);

    for line in ["0", "99"] {
        mdsplit()
            .arg("extract")
            .arg(&doc)
            .args(["--line", line])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid heading line selected."));
    }
}

#[test]
fn test_extract_unknown_title() {
    let (_dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--heading", "Celsius"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No heading titled \"Celsius\" found."));
}

#[test]
fn test_extract_missing_document() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    mdsplit()
        .arg("extract")
        .arg(dir.path().join("missing.md"))
        .args(["--line", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active file found."));
}

#[test]
fn test_extract_dry_run_writes_nothing() {
    let (dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--line", "2", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would extract heading into Temp Scales.md"))
        .stdout(predicate::str::contains("# Temp Scales"));

    assert_eq!(read(&doc), PHYSICS);
    assert!(!dir.path().join("Temp Scales.md").exists());
}

#[test]
fn test_extract_dry_run_json_conflict() {
    let (dir, doc) = setup_notes(PHYSICS);
    fs::write(dir.path().join("Temp Scales.md"), "already here").unwrap();

    let output = mdsplit()
        .args(["--json", "extract"])
        .arg(&doc)
        .args(["--line", "2", "--dry-run"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], false);
    assert_eq!(report["dry_run"], true);
    assert!(report["error"].as_str().unwrap().contains("It might already exist."));
}

#[test]
fn test_extract_json_report() {
    let (_dir, doc) = setup_notes(PHYSICS);

    let output = mdsplit()
        .arg("--json")
        .arg("extract")
        .arg(&doc)
        .args(["--line", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["note_name"], "Temp Scales.md");
    assert_eq!(report["section"]["first"], 2);
    assert_eq!(report["section"]["last"], 5);
}

#[test]
fn test_extract_json_failure_report() {
    let (_dir, doc) = setup_notes(PHYSICS);

    let output = mdsplit()
        .arg("--json")
        .arg("extract")
        .arg(&doc)
        .args(["--line", "3"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], false);
    assert_eq!(report["error"], "Not a valid heading line.");
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_extract_into_configured_folder() {
    let (dir, doc) = setup_notes(PHYSICS);
    fs::write(dir.path().join(".mdsplit.toml"), "[extract]\nfolder = \"split\"\n").unwrap();

    mdsplit().arg("extract").arg(&doc).args(["--line", "2"]).assert().success();

    assert!(dir.path().join("split").join("Temp Scales.md").is_file());
    assert_eq!(read(&doc), PHYSICS_AFTER);
}

#[test]
fn test_config_shows_project_file() {
    let (dir, _doc) = setup_notes(PHYSICS);
    fs::write(dir.path().join(".mdsplit.toml"), "[extract]\nextension = \"markdown\"\n").unwrap();

    mdsplit()
        .arg("config")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".mdsplit.toml"))
        .stdout(predicate::str::contains("extension = \"markdown\""));
}

#[test]
fn test_broken_config_is_an_error() {
    let (dir, doc) = setup_notes(PHYSICS);
    fs::write(dir.path().join(".mdsplit.toml"), "[extract\n").unwrap();

    mdsplit()
        .arg("extract")
        .arg(&doc)
        .args(["--line", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));

    assert_eq!(read(&doc), PHYSICS);
}

// =============================================================================
// HEADINGS AND CHECK
// =============================================================================

#[test]
fn test_headings_lists_sections() {
    let (_dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("headings")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Temp Scales  (4 lines)"))
        .stdout(predicate::str::contains("### Kelvin  (2 lines)"));
}

#[test]
fn test_headings_json() {
    let (_dir, doc) = setup_notes(PHYSICS);

    let output = mdsplit().args(["--json", "headings"]).arg(&doc).output().unwrap();

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let headings = result["headings"].as_array().unwrap();
    assert_eq!(headings.len(), 4);
    assert_eq!(headings[1]["note_name"], "Temp Scales.md");
    assert_eq!(headings[1]["line"], 2);
}

#[test]
fn test_check_heading_line() {
    let (_dir, doc) = setup_notes(PHYSICS);

    mdsplit()
        .arg("check")
        .arg(&doc)
        .args(["--line", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a heading: Kelvin"));

    mdsplit().arg("check").arg(&doc).args(["--line", "3"]).assert().failure();
}
