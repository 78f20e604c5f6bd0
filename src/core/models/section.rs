//! Section model
//!
//! A section is the half-open line range `[start, end)` owned by a heading.

use std::ops::Range;

use serde::Serialize;

/// The lines belonging to a heading
///
/// `start` is the heading line. `end` is the next heading at the same or a
/// shallower depth, or the document length. Deeper headings are part of the
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Index of the heading line
    pub start: usize,
    /// One past the last line of the section
    pub end: usize,
    /// Depth of the heading at `start`
    pub depth: usize,
}

impl Section {
    /// Number of lines in the section, heading included
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// A section always contains its heading line
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whole section range, heading included
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Body range (everything after the heading line)
    #[must_use]
    pub const fn body(&self) -> Range<usize> {
        self.start + 1..self.end
    }

    /// Number of lines that leave the original document
    #[must_use]
    pub const fn body_len(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Borrow the section's lines out of the full document
    #[must_use]
    pub fn lines<'a, S>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.range()]
    }
}
