//! Note naming
//!
//! Turns a heading title into the file name of the extracted note.

/// Characters that cannot appear in a note name
pub const ILLEGAL_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Default note extension
pub const DEFAULT_EXTENSION: &str = "md";

/// Derive a note name from a heading title
///
/// Illegal characters are dropped (not replaced), surrounding whitespace is
/// trimmed, and `.extension` is appended. No collision handling is done here.
#[must_use]
pub fn note_name(title: &str, extension: &str) -> String {
    let stem: String = title.trim().chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect();
    let extension = extension.trim_start_matches('.');
    format!("{}.{extension}", stem.trim())
}
