//! Extract command - move a heading section into a new note

use std::path::Path;
use std::process::ExitCode;

use mdsplit::adapters::{ConsoleNotifier, FileEditor, FsDocumentStore};
use mdsplit::config::Config;
use mdsplit::core::services::{Selection, preview_extract, run_extract};
use mdsplit::output::{ExtractReport, OutputMode};

use super::line_index;

/// Extract the heading at `line` (1-based) or titled `heading` from `file`
pub fn extract(
    file: &Path,
    line: Option<usize>,
    heading: Option<String>,
    dry_run: bool,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let (config, _) = Config::load_for(file)?;
    let options = config.extract_options();

    let store = FsDocumentStore::new();
    let editor = FileEditor::open(&store, file, line.map_or(0, line_index))?;
    let notifier = ConsoleNotifier::new(mode);

    let selection = heading.map_or(Selection::Cursor, Selection::Title);
    let source = file.display().to_string();

    // Failures were already shown by the notifier; only the JSON report remains
    if dry_run {
        match preview_extract(&editor, &store, &notifier, options, &selection) {
            Ok(preview) => {
                ExtractReport::previewed(&preview).render(mode);
                Ok(if preview.conflict {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                })
            },
            Err(err) => {
                if mode == OutputMode::Json {
                    ExtractReport::failed(&source, &err.to_string(), true).render(mode);
                }
                Ok(ExitCode::FAILURE)
            },
        }
    } else {
        match run_extract(&editor, &store, &notifier, options, &selection) {
            Ok(outcome) => {
                ExtractReport::completed(&outcome).render(mode);
                Ok(ExitCode::SUCCESS)
            },
            Err(err) => {
                if mode == OutputMode::Json {
                    ExtractReport::failed(&source, &err.to_string(), false).render(mode);
                }
                Ok(ExitCode::FAILURE)
            },
        }
    }
}
