//! Business logic services
//!
//! - [`scanner`] - Find the line range a heading owns
//! - [`shifter`] - Re-level headings so a section stands on its own
//! - [`naming`] - Derive a note file name from a heading title
//! - [`extractor`] - Plan and run the split/rewrite transaction
//! - [`command`] - Resolve the user's selection and report the outcome

pub mod command;
pub mod extractor;
pub mod naming;
pub mod scanner;
pub mod shifter;

pub use command::{Preview, Selection, can_extract, preview_extract, resolve_selection, run_extract};
pub use extractor::{ExtractOptions, ExtractionOutcome, ExtractionPlan, Extractor, plan_extraction};
pub use naming::note_name;
pub use scanner::{heading_at, scan_section};
pub use shifter::shift_levels;
