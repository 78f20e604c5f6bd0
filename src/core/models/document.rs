//! Document model
//!
//! A document is the ordered list of its lines. Text is split on `\n` with an
//! optional preceding `\r`, and rendered back with `\n` only.

use std::fmt;

use super::heading::Heading;

/// A Markdown document as an ordered list of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text into lines
    ///
    /// A trailing newline yields a trailing empty line so that rendering the
    /// document reproduces the input (modulo `\r`).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// Build a document from lines
    #[must_use]
    pub const fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// All lines in order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the document, returning its lines
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of a line
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Parse the line at `index` as a heading
    #[must_use]
    pub fn heading_at(&self, index: usize) -> Option<Heading<'_>> {
        self.line(index).and_then(Heading::parse)
    }

    /// Iterate over `(index, heading)` for every heading line
    pub fn headings(&self) -> impl Iterator<Item = (usize, Heading<'_>)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| Heading::parse(line).map(|h| (i, h)))
    }

    /// Join the lines back into text
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_lines(iter.into_iter().collect())
    }
}
