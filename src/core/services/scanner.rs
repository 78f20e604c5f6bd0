//! Section boundary scanning
//!
//! A heading owns every following line up to the next heading at the same or
//! a shallower depth. Deeper headings are nested content.

use crate::core::error::ExtractError;
use crate::core::models::{Heading, Section};

/// Parse the heading at `index`, validating the index first
pub fn heading_at<S: AsRef<str>>(lines: &[S], index: usize) -> Result<Heading<'_>, ExtractError> {
    let line = lines.get(index).ok_or_else(|| ExtractError::out_of_range(index))?;
    Heading::parse(line.as_ref()).ok_or_else(|| ExtractError::not_a_heading(index))
}

/// Compute the section owned by the heading at `heading_index`
///
/// Pure: the same inputs always give the same section.
pub fn scan_section<S: AsRef<str>>(lines: &[S], heading_index: usize) -> Result<Section, ExtractError> {
    let depth = heading_at(lines, heading_index)?.depth;

    let end = lines
        .iter()
        .enumerate()
        .skip(heading_index + 1)
        .find(|(_, line)| Heading::parse(line.as_ref()).is_some_and(|h| h.depth <= depth))
        .map_or(lines.len(), |(i, _)| i);

    Ok(Section {
        start: heading_index,
        end,
        depth,
    })
}
