//! Centralized path definitions for mdsplit
//!
//! ## Configuration Layout
//!
//! ```text
//! notes/                          # Any folder above the document
//! ├── .mdsplit.toml              # Project config (nearest one wins)
//! └── journal/
//!     └── 2024.md
//!
//! ~/.mdsplit/
//! └── config.toml                # Global fallback
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".mdsplit.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".mdsplit";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global mdsplit directory.
///
/// Returns `~/.mdsplit/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.mdsplit/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Find the nearest `.mdsplit.toml` at or above `from`
///
/// If `from` is a file, the search starts in its folder. Stops at a `.git`
/// directory or the filesystem root.
#[must_use]
pub fn find_project_config(from: &Path) -> Option<PathBuf> {
    let mut current = if from.is_file() {
        from.parent().unwrap_or(from).to_path_buf()
    } else {
        from.to_path_buf()
    };

    loop {
        let candidate = current.join(PROJECT_CONFIG);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at repo root (.git) or filesystem root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}
