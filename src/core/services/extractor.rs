//! Split transaction
//!
//! Moves a heading's section into a new note and leaves an embed marker
//! behind. The new note is created before the original is touched, so a
//! failed create (name taken, bad name, I/O) leaves the original as it was.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::core::error::ExtractError;
use crate::core::models::{Document, EmbedMarker, Section};
use crate::core::ports::{DocumentStore, StoreError};

use super::naming::{self, DEFAULT_EXTENSION};
use super::scanner::{heading_at, scan_section};
use super::shifter::shift_levels;

/// Knobs for where and how new notes are created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Extension appended to the note name (without the dot)
    pub extension: String,
    /// Subfolder, relative to the source document's folder, for new notes
    pub folder: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            folder: None,
        }
    }
}

impl ExtractOptions {
    /// Folder a note extracted from `source` is created in
    #[must_use]
    pub fn target_folder(&self, source: &Path) -> PathBuf {
        let parent = source.parent().unwrap_or_else(|| Path::new(""));
        match &self.folder {
            Some(folder) => parent.join(folder),
            None => parent.to_path_buf(),
        }
    }
}

/// Everything an extraction will do, computed without touching storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPlan {
    /// The section being extracted
    pub section: Section,
    /// Trimmed heading title
    pub title: String,
    /// File name of the new note
    pub note_name: String,
    /// Content of the new note, re-leveled
    pub extracted: Document,
    retained: Vec<String>,
}

impl ExtractionPlan {
    /// Original lines with the section body removed and the heading kept
    #[must_use]
    pub fn retained(&self) -> &[String] {
        &self.retained
    }

    /// Marker pointing at the new note
    #[must_use]
    pub fn marker(&self) -> EmbedMarker {
        EmbedMarker::new(self.note_name.clone())
    }

    /// The original document after extraction
    ///
    /// The marker goes directly below the retained heading line.
    #[must_use]
    pub fn rewritten(&self) -> Document {
        let at = self.section.start + 1;
        let mut lines = Vec::with_capacity(self.retained.len() + 1);
        lines.extend_from_slice(&self.retained[..at]);
        lines.push(self.marker().render());
        lines.extend_from_slice(&self.retained[at..]);
        Document::from_lines(lines)
    }
}

/// Plan the extraction of the heading at `heading_index`
///
/// Pure: validates the heading, scans its section, re-levels the section so
/// the heading becomes depth 1, and names the note.
pub fn plan_extraction(
    document: &Document,
    heading_index: usize,
    extension: &str,
) -> Result<ExtractionPlan, ExtractError> {
    let lines = document.lines();
    let heading = heading_at(lines, heading_index)?;
    let section = scan_section(lines, heading_index)?;

    let retained = lines[..=heading_index].iter().chain(&lines[section.end..]).cloned().collect();
    let extracted = Document::from_lines(shift_levels(section.lines(lines), heading.depth - 1));

    Ok(ExtractionPlan {
        section,
        title: heading.title().to_string(),
        note_name: naming::note_name(heading.title(), extension),
        extracted,
        retained,
    })
}

/// Result of a completed extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionOutcome {
    /// Document the section was extracted from
    pub source: PathBuf,
    /// Path of the new note
    pub created: PathBuf,
    /// Identifier used in the embed marker
    pub note_name: String,
    /// The section that was moved
    pub section: Section,
}

/// Runs extractions against a document store
#[derive(Debug)]
pub struct Extractor<'a, S: ?Sized> {
    store: &'a S,
    options: ExtractOptions,
}

impl<'a, S: DocumentStore + ?Sized> Extractor<'a, S> {
    /// Create an extractor over `store`
    #[must_use]
    pub const fn new(store: &'a S, options: ExtractOptions) -> Self {
        Self { store, options }
    }

    /// Options in use
    #[must_use]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Read `doc` and plan the extraction without writing anything
    pub fn plan(&self, doc: &Path, heading_index: usize) -> Result<ExtractionPlan, ExtractError> {
        let text = self.store.read(doc)?;
        let document = Document::parse(&text);
        debug!("read {} ({} lines)", doc.display(), document.len());
        plan_extraction(&document, heading_index, &self.options.extension)
    }

    /// Where the note for `plan` would be created
    #[must_use]
    pub fn target_path(&self, doc: &Path, plan: &ExtractionPlan) -> PathBuf {
        self.options.target_folder(doc).join(&plan.note_name)
    }

    /// Extract the heading at `heading_index` of `doc` into a new note
    pub fn extract(&self, doc: &Path, heading_index: usize) -> Result<ExtractionOutcome, ExtractError> {
        let plan = self.plan(doc, heading_index)?;
        self.apply(doc, &plan)
    }

    /// Carry out a plan: create the note, then rewrite the original
    ///
    /// The original is written only after the note exists.
    pub fn apply(&self, doc: &Path, plan: &ExtractionPlan) -> Result<ExtractionOutcome, ExtractError> {
        let folder = self.options.target_folder(doc);
        debug!(
            "extracting lines {}..{} of {} into {}",
            plan.section.start,
            plan.section.end,
            doc.display(),
            folder.join(&plan.note_name).display()
        );

        let created = self
            .store
            .create(&folder, &plan.note_name, &plan.extracted.render())
            .map_err(|err| match err {
                StoreError::AlreadyExists(path) => ExtractError::CreationConflict { path },
                other => ExtractError::Storage(other),
            })?;
        info!("created {}", created.display());

        self.store.write(doc, &plan.rewritten().render())?;
        info!("rewrote {} ({} lines moved out)", doc.display(), plan.section.body_len());

        Ok(ExtractionOutcome {
            source: doc.to_path_buf(),
            created,
            note_name: plan.note_name.clone(),
            section: plan.section,
        })
    }
}
