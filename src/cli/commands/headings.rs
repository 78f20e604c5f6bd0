//! Headings command - list what can be extracted

use std::path::Path;
use std::process::ExitCode;

use mdsplit::adapters::FsDocumentStore;
use mdsplit::config::Config;
use mdsplit::core::models::Document;
use mdsplit::core::ports::DocumentStore;
use mdsplit::core::services::{note_name, scan_section};
use mdsplit::output::{HeadingInfo, HeadingListResult, OutputMode};

/// List every heading in `file` with its section size
pub fn headings(file: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let (config, _) = Config::load_for(file)?;
    let extension = config.extract_options().extension;

    let text = FsDocumentStore::new().read(file)?;
    let document = Document::parse(&text);

    let mut headings = Vec::new();
    for (index, heading) in document.headings() {
        let section = scan_section(document.lines(), index)?;
        headings.push(HeadingInfo {
            line: index + 1,
            depth: heading.depth,
            title: heading.title().to_string(),
            lines: section.len(),
            note_name: note_name(heading.title(), &extension),
        });
    }

    HeadingListResult {
        file: file.display().to_string(),
        headings,
    }
    .render(mode);

    Ok(ExitCode::SUCCESS)
}
