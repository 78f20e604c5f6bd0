//! Extract command
//!
//! Entry point shared by every way of invoking an extraction. Resolves which
//! heading the user means, runs the transaction, and reports the outcome
//! through the notifier exactly once.

use std::path::PathBuf;

use log::debug;

use crate::core::error::ExtractError;
use crate::core::models::Heading;
use crate::core::ports::{DocumentStore, Editor, Notice, Notifier};

use super::extractor::{ExtractOptions, ExtractionOutcome, ExtractionPlan, Extractor};

/// How the user picked the heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The heading under the editor cursor
    Cursor,
    /// The first heading whose trimmed title matches
    Title(String),
}

/// Whether the extract command is available for the editor's current state
#[must_use]
pub fn can_extract<E: Editor + ?Sized>(editor: &E) -> bool {
    editor.is_heading_at_cursor()
}

/// Resolve a selection to `(document, line index)`
///
/// The line is not validated here; the extractor rejects non-headings.
pub fn resolve_selection<E: Editor + ?Sized>(
    editor: &E,
    selection: &Selection,
) -> Result<(PathBuf, usize), ExtractError> {
    let doc = editor.active_document().ok_or(ExtractError::NoActiveDocument)?;
    let line = match selection {
        Selection::Cursor => editor.cursor_line(),
        Selection::Title(title) => find_heading(editor, title.trim()).ok_or_else(|| {
            ExtractError::HeadingNotFound {
                title: title.clone(),
            }
        })?,
    };
    Ok((doc, line))
}

fn find_heading<E: Editor + ?Sized>(editor: &E, title: &str) -> Option<usize> {
    (0..)
        .map_while(|i| editor.line(i).map(|line| (i, line)))
        .find(|(_, line)| Heading::parse(line).is_some_and(|h| h.title() == title))
        .map(|(i, _)| i)
}

/// Extract the selected heading and notify the user of the result
pub fn run_extract<E, S, N>(
    editor: &E,
    store: &S,
    notifier: &N,
    options: ExtractOptions,
    selection: &Selection,
) -> Result<ExtractionOutcome, ExtractError>
where
    E: Editor + ?Sized,
    S: DocumentStore + ?Sized,
    N: Notifier + ?Sized,
{
    let result = resolve_selection(editor, selection)
        .and_then(|(doc, line)| Extractor::new(store, options).extract(&doc, line));

    match &result {
        Ok(outcome) => {
            notifier.notify(&Notice::success(format!("Extracted heading into {}", outcome.note_name)));
        },
        Err(err) => {
            debug!("extraction aborted: {err:?}");
            notifier.notify(&Notice::error(err.to_string()));
        },
    }
    result
}

/// A planned extraction that was not carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Document the section would be extracted from
    pub source: PathBuf,
    /// Path the new note would be created at
    pub target: PathBuf,
    /// Whether `target` already exists (the real run would fail)
    pub conflict: bool,
    /// The plan itself
    pub plan: ExtractionPlan,
}

/// Plan the selected extraction without writing, notifying the user
pub fn preview_extract<E, S, N>(
    editor: &E,
    store: &S,
    notifier: &N,
    options: ExtractOptions,
    selection: &Selection,
) -> Result<Preview, ExtractError>
where
    E: Editor + ?Sized,
    S: DocumentStore + ?Sized,
    N: Notifier + ?Sized,
{
    let result = resolve_selection(editor, selection).and_then(|(doc, line)| {
        let extractor = Extractor::new(store, options);
        let plan = extractor.plan(&doc, line)?;
        let target = extractor.target_path(&doc, &plan);
        Ok(Preview {
            conflict: store.exists(&target),
            source: doc,
            target,
            plan,
        })
    });

    match &result {
        Ok(preview) if preview.conflict => notifier.notify(&Notice::error(
            ExtractError::CreationConflict {
                path: preview.target.clone(),
            }
            .to_string(),
        )),
        Ok(preview) => notifier.notify(&Notice::info(format!(
            "Would extract heading into {}",
            preview.plan.note_name
        ))),
        Err(err) => notifier.notify(&Notice::error(err.to_string())),
    }
    result
}
