//! Command implementations

mod check;
mod config;
mod extract;
mod headings;

pub use check::check;
pub use config::config;
pub use extract::extract;
pub use headings::headings;

/// Convert a 1-based line number to a zero-based index
///
/// Line 0 maps past any document end so it is reported as out of range.
const fn line_index(line: usize) -> usize {
    match line.checked_sub(1) {
        Some(index) => index,
        None => usize::MAX,
    }
}
