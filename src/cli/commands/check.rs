//! Check command - is the extract command available for a line?

use std::path::Path;
use std::process::ExitCode;

use mdsplit::adapters::{FileEditor, FsDocumentStore};
use mdsplit::core::models::Heading;
use mdsplit::core::ports::Editor;
use mdsplit::core::services::can_extract;
use mdsplit::output::{CheckResult, OutputMode};

use super::line_index;

/// Report whether `line` (1-based) of `file` is a heading
pub fn check(file: &Path, line: usize, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let store = FsDocumentStore::new();
    let editor = FileEditor::open(&store, file, line_index(line))?;

    let extractable = can_extract(&editor);
    let title = editor
        .line(editor.cursor_line())
        .and_then(|text| Heading::parse(&text).map(|h| h.title().to_string()));

    CheckResult {
        file: file.display().to_string(),
        line,
        extractable,
        title,
    }
    .render(mode);

    Ok(if extractable {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
