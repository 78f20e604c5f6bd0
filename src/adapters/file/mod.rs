//! File-based document storage
//!
//! Implements `DocumentStore` on the local filesystem. New notes are opened
//! with `create_new`, so an existing file is never overwritten.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};

use crate::core::ports::{DocumentStore, StoreError};

/// Document store backed by the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentStore;

impl FsDocumentStore {
    /// Create a new filesystem store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// A note name must be a single path component with something before its
/// extension. `.NET Basics.md` is fine; a bare `.md` is not.
fn validate_name(name: &str) -> Result<(), StoreError> {
    let mut components = Path::new(name).components();
    let single = matches!((components.next(), components.next()), (Some(Component::Normal(_)), None));
    let has_stem = !name.rsplit_once('.').map_or(name, |(stem, _)| stem).is_empty();

    if single && has_stem {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// Create `path` (never overwriting) and fill it with `fill`
///
/// A file that could not be filled is removed again, so a failed write
/// leaves nothing behind to conflict with a retry.
fn create_with<F>(path: &Path, fill: F) -> Result<(), StoreError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => StoreError::AlreadyExists(path.to_path_buf()),
            _ => StoreError::Write {
                path: path.to_path_buf(),
                source,
            },
        })?;

    if let Err(source) = fill(&mut file) {
        drop(file);
        if let Err(err) = fs::remove_file(path) {
            warn!("could not remove partial note {}: {err}", path.display());
        }
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

impl DocumentStore for FsDocumentStore {
    fn read(&self, doc: &Path) -> Result<String, StoreError> {
        fs::read_to_string(doc).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StoreError::NotFound(doc.to_path_buf()),
            _ => StoreError::Read {
                path: doc.to_path_buf(),
                source,
            },
        })
    }

    fn write(&self, doc: &Path, content: &str) -> Result<(), StoreError> {
        fs::write(doc, content).map_err(|source| StoreError::Write {
            path: doc.to_path_buf(),
            source,
        })
    }

    fn create(&self, folder: &Path, name: &str, content: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        let path = folder.join(name);

        if !folder.as_os_str().is_empty() {
            fs::create_dir_all(folder).map_err(|source| StoreError::Write {
                path: folder.to_path_buf(),
                source,
            })?;
        }

        create_with(&path, |file| file.write_all(content.as_bytes()))?;
        debug!("wrote {} bytes to {}", content.len(), path.display());

        Ok(path)
    }

    fn exists(&self, doc: &Path) -> bool {
        doc.exists()
    }
}
