//! Extraction errors
//!
//! Every variant is terminal for the current invocation and is shown to the
//! user exactly once. Display strings are the user-facing notice text.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::ports::StoreError;

/// Why a line cannot be extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHeadingReason {
    /// The line index is past the end of the document
    OutOfRange,
    /// The line exists but is not a heading
    NotAHeading,
}

impl fmt::Display for InvalidHeadingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "Invalid heading line selected."),
            Self::NotAHeading => write!(f, "Not a valid heading line."),
        }
    }
}

/// Errors that abort an extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Target line is out of range or not a heading; nothing was changed
    #[error("{reason}")]
    InvalidHeading {
        /// Zero-based line index that was requested
        line: usize,
        /// What was wrong with it
        reason: InvalidHeadingReason,
    },

    /// No heading with the requested title exists in the document
    #[error("No heading titled \"{title}\" found.")]
    HeadingNotFound {
        /// Title that was searched for
        title: String,
    },

    /// There is no document to extract from
    #[error("No active file found.")]
    NoActiveDocument,

    /// The new note's path is already taken; the original is unmodified
    #[error("Could not create file \"{}\". It might already exist.", path.display())]
    CreationConflict {
        /// Path that already exists
        path: PathBuf,
    },

    /// Underlying read/write failure, passed through as-is
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ExtractError {
    /// Invalid heading error for a line index past the document end
    #[must_use]
    pub const fn out_of_range(line: usize) -> Self {
        Self::InvalidHeading {
            line,
            reason: InvalidHeadingReason::OutOfRange,
        }
    }

    /// Invalid heading error for a line that is not a heading
    #[must_use]
    pub const fn not_a_heading(line: usize) -> Self {
        Self::InvalidHeading {
            line,
            reason: InvalidHeadingReason::NotAHeading,
        }
    }
}
