//! Domain models for mdsplit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Document`] - A Markdown document as an ordered list of lines
//! - [`Heading`] - A parsed ATX heading line (`## Title`)
//! - [`Section`] - The line range owned by a heading
//! - [`EmbedMarker`] - The line that replaces an extracted section

mod document;
mod embed;
mod heading;
mod section;

pub use document::Document;
pub use embed::{EMBED_FLAGS, EmbedMarker};
pub use heading::{Heading, is_heading};
pub use section::Section;
