//! Embed marker
//!
//! The marker line left in the original document where the section body used
//! to be. Renderers rely on the exact token spelling and spacing.

use std::fmt;

/// Display flags that hide the embedded note's own heading and titles
pub const EMBED_FLAGS: &str = "no-h1 no-title no-inline-title";

/// Reference to an extracted note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMarker {
    identifier: String,
}

impl EmbedMarker {
    /// Create a marker for the note with the given identifier (e.g. `Notes.md`)
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Identifier of the embedded note
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Render the marker line
    #[must_use]
    pub fn render(&self) -> String {
        format!("![[{} | {EMBED_FLAGS} ]]", self.identifier)
    }
}

impl fmt::Display for EmbedMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
