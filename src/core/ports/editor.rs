//! Editor port
//!
//! Gives the extraction command access to the focused document and cursor.

use std::path::PathBuf;

use crate::core::models::is_heading;

/// The editor the command is invoked from
pub trait Editor {
    /// The focused document, if any
    fn active_document(&self) -> Option<PathBuf>;

    /// Zero-based line index of the cursor
    fn cursor_line(&self) -> usize;

    /// Text of a line in the active document
    fn line(&self, index: usize) -> Option<String>;

    /// Whether the cursor sits on a heading line
    ///
    /// Gates availability of the extract command.
    fn is_heading_at_cursor(&self) -> bool {
        self.active_document().is_some()
            && self.line(self.cursor_line()).is_some_and(|line| is_heading(&line))
    }
}
