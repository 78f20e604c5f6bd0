//! File editor adapter
//!
//! Implements `Editor` for the command line: the "active document" is the
//! file named on the command line and the cursor is the requested line.

use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::Document;
use crate::core::ports::{DocumentStore, Editor, StoreError};

/// A document opened at a cursor position
#[derive(Debug, Clone, Default)]
pub struct FileEditor {
    path: Option<PathBuf>,
    cursor: usize,
    buffer: Document,
}

impl FileEditor {
    /// Open `path` through `store` with the cursor on `cursor` (zero-based)
    ///
    /// A missing document leaves the editor without an active document, which
    /// the extract command reports as such.
    pub fn open<S: DocumentStore + ?Sized>(store: &S, path: &Path, cursor: usize) -> Result<Self, StoreError> {
        match store.read(path) {
            Ok(text) => {
                let buffer = Document::parse(&text);
                debug!("opened {} at line {cursor} of {}", path.display(), buffer.len());
                Ok(Self {
                    path: Some(path.to_path_buf()),
                    cursor,
                    buffer,
                })
            },
            Err(StoreError::NotFound(_)) => Ok(Self::detached()),
            Err(err) => Err(err),
        }
    }

    /// An editor with nothing open
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// The buffer as it was when opened
    #[must_use]
    pub const fn buffer(&self) -> &Document {
        &self.buffer
    }
}

impl Editor for FileEditor {
    fn active_document(&self) -> Option<PathBuf> {
        self.path.clone()
    }

    fn cursor_line(&self) -> usize {
        self.cursor
    }

    fn line(&self, index: usize) -> Option<String> {
        self.path.as_ref()?;
        self.buffer.line(index).map(str::to_string)
    }
}
