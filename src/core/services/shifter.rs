//! Heading level shifting

use crate::core::models::Heading;

/// Reduce every heading's depth by `shift`, flooring at depth 1
///
/// Heading text is kept verbatim. Non-heading lines pass through unchanged.
/// Headings that would drop below depth 1 are clamped, so a nested heading
/// that was shallower than the section heading can end up at depth 1 too.
#[must_use]
pub fn shift_levels<S: AsRef<str>>(lines: &[S], shift: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            Heading::parse(line).map_or_else(
                || line.to_string(),
                |h| h.with_depth(h.depth.saturating_sub(shift)),
            )
        })
        .collect()
}
