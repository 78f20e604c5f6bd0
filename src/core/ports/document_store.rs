//! Document storage port
//!
//! Defines whole-document read/replace and create-new operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reported by a document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document already exists at the requested path
    #[error("document already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The document does not exist
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The requested document name cannot be used
    #[error("invalid document name: {0:?}")]
    InvalidName(String),

    /// Reading a document failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing a document failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Storage for Markdown documents
///
/// Documents are only ever read and replaced whole.
pub trait DocumentStore {
    /// Read a document's full text
    fn read(&self, doc: &Path) -> Result<String, StoreError>;

    /// Replace a document's full text
    fn write(&self, doc: &Path, content: &str) -> Result<(), StoreError>;

    /// Create a new document named `name` inside `folder`
    ///
    /// Must fail with [`StoreError::AlreadyExists`] rather than overwrite.
    /// Returns the path of the created document.
    fn create(&self, folder: &Path, name: &str, content: &str) -> Result<PathBuf, StoreError>;

    /// Whether a document exists at `doc`
    fn exists(&self, doc: &Path) -> bool;
}
