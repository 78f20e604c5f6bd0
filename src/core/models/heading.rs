//! Heading line parsing
//!
//! A heading is one or more `#` markers, at least one whitespace character,
//! then the heading text. `#hashtag` and a bare `##` are not headings.
//!
//! # Examples
//!
//! ```
//! use mdsplit::core::models::Heading;
//!
//! let h = Heading::parse("## Temp Scales").unwrap();
//! assert_eq!(h.depth, 2);
//! assert_eq!(h.title(), "Temp Scales");
//! assert!(Heading::parse("#hashtag").is_none());
//! ```

use std::sync::LazyLock;

use regex::Regex;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)").expect("heading pattern compiles"));

/// Heading marker character
pub const MARKER: char = '#';

/// A parsed heading line
///
/// Borrows from the line it was parsed from; headings are recomputed on every
/// scan and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of `#` markers (always >= 1)
    pub depth: usize,

    /// Text after the marker whitespace, exactly as written
    pub text: &'a str,
}

impl<'a> Heading<'a> {
    /// Parse a line as a heading
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = HEADING_PATTERN.captures(line)?;
        let markers = caps.get(1)?;
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some(Self {
            depth: markers.as_str().len(),
            text,
        })
    }

    /// Heading title with surrounding whitespace removed
    #[must_use]
    pub fn title(&self) -> &'a str {
        self.text.trim()
    }

    /// Render this heading at a different depth
    ///
    /// Depth is floored at 1 and the text is carried over untouched, so inner
    /// `#` characters in the title survive.
    #[must_use]
    pub fn with_depth(&self, depth: usize) -> String {
        let depth = depth.max(1);
        let mut line = String::with_capacity(depth + 1 + self.text.len());
        line.extend(std::iter::repeat_n(MARKER, depth));
        line.push(' ');
        line.push_str(self.text);
        line
    }
}

/// Whether a line is a heading line
///
/// This is the availability predicate for the extract command.
#[must_use]
pub fn is_heading(line: &str) -> bool {
    HEADING_PATTERN.is_match(line)
}
