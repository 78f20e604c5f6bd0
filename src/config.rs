//! Configuration management
//!
//! Settings come from the nearest `.mdsplit.toml` above the document, then
//! `~/.mdsplit/config.toml`, then built-in defaults. Files are TOML:
//!
//! ```toml
//! [extract]
//! extension = "md"
//! folder = "extracted"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::ExtractOptions;
use crate::core::services::naming::DEFAULT_EXTENSION;
use crate::paths;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// mdsplit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Extension of new notes
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Subfolder (relative to the source document) for new notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            folder: None,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum ConfigSource {
    /// A `.mdsplit.toml` above the document
    Project(PathBuf),
    /// The global config file
    Global(PathBuf),
    /// No file; built-in defaults
    Default,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration that applies to `document`
    ///
    /// A broken config file is an error rather than a silent fallback.
    pub fn load_for(document: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let start = document.canonicalize().unwrap_or_else(|_| document.to_path_buf());

        if let Some(path) = paths::find_project_config(&start) {
            debug!("using project config {}", path.display());
            return Ok((Self::load_file(&path)?, ConfigSource::Project(path)));
        }

        let global = paths::global_config();
        if global.is_file() {
            debug!("using global config {}", global.display());
            return Ok((Self::load_file(&global)?, ConfigSource::Global(global)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Options for the extractor
    ///
    /// An extension that is empty once leading dots are dropped falls back to
    /// the default, so note names always end in a real extension.
    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        let extension = self.extract.extension.trim().trim_start_matches('.');
        let extension = if extension.is_empty() {
            warn!("ignoring empty extension {:?}, using {DEFAULT_EXTENSION}", self.extract.extension);
            DEFAULT_EXTENSION
        } else {
            extension
        };

        ExtractOptions {
            extension: extension.to_string(),
            folder: self.extract.folder.clone(),
        }
    }
}
