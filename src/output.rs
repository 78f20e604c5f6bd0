//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::config::{Config, ConfigSource};
use crate::core::ExtractError;
use crate::core::services::{ExtractionOutcome, Preview};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Line range in 1-based, inclusive editor terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    /// First line (1-based)
    pub first: usize,
    /// Last line (1-based, inclusive)
    pub last: usize,
}

impl LineSpan {
    /// Convert a zero-based half-open range
    #[must_use]
    pub const fn from_range(start: usize, end: usize) -> Self {
        Self {
            first: start + 1,
            last: if end > start { end } else { start + 1 },
        }
    }
}

/// Result of an extract operation
#[derive(Debug, Serialize)]
pub struct ExtractReport {
    /// Whether the extraction succeeded
    pub success: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Source document
    pub source: String,
    /// Note that was (or would be) created
    pub target: Option<String>,
    /// Identifier used in the embed marker
    pub note_name: Option<String>,
    /// Lines that were (or would be) moved out, heading included
    pub section: Option<LineSpan>,
    /// Content of the new note (dry run only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted: Option<Vec<String>>,
    /// Original document after the rewrite (dry run only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<Vec<String>>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractReport {
    /// Report for a completed extraction
    #[must_use]
    pub fn completed(outcome: &ExtractionOutcome) -> Self {
        Self {
            success: true,
            dry_run: false,
            source: outcome.source.display().to_string(),
            target: Some(outcome.created.display().to_string()),
            note_name: Some(outcome.note_name.clone()),
            section: Some(LineSpan::from_range(outcome.section.start, outcome.section.end)),
            extracted: None,
            rewritten: None,
            error: None,
        }
    }

    /// Report for a dry run
    ///
    /// A conflicting target makes the report unsuccessful and carries the
    /// same message a real run would fail with.
    #[must_use]
    pub fn previewed(preview: &Preview) -> Self {
        let section = preview.plan.section;
        Self {
            success: !preview.conflict,
            dry_run: true,
            source: preview.source.display().to_string(),
            target: Some(preview.target.display().to_string()),
            note_name: Some(preview.plan.note_name.clone()),
            section: Some(LineSpan::from_range(section.start, section.end)),
            extracted: Some(preview.plan.extracted.lines().to_vec()),
            rewritten: Some(preview.plan.rewritten().into_lines()),
            error: preview.conflict.then(|| {
                ExtractError::CreationConflict {
                    path: preview.target.clone(),
                }
                .to_string()
            }),
        }
    }

    /// Report for a failed extraction
    #[must_use]
    pub fn failed(source: &str, error: &str, dry_run: bool) -> Self {
        Self {
            success: false,
            dry_run,
            source: source.to_string(),
            target: None,
            note_name: None,
            section: None,
            extracted: None,
            rewritten: None,
            error: Some(error.to_string()),
        }
    }

    /// Render the result based on output mode
    ///
    /// Human mode only adds detail below the notice already shown.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let (Some(target), Some(section)) = (&self.target, &self.section) {
            println!("  Source:  {} (lines {}-{})", self.source, section.first, section.last);
            println!("  Note:    {target}");
        }

        if let Some(extracted) = &self.extracted {
            println!("\n--- {} ---", self.note_name.as_deref().unwrap_or("new note"));
            for line in extracted {
                println!("{line}");
            }
        }
        if let Some(rewritten) = &self.rewritten {
            println!("\n--- {} ---", self.source);
            for line in rewritten {
                println!("{line}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// A heading row in a headings listing
#[derive(Debug, Serialize)]
pub struct HeadingInfo {
    /// Line number (1-based)
    pub line: usize,
    /// Heading depth
    pub depth: usize,
    /// Trimmed title
    pub title: String,
    /// Section size in lines, heading included
    pub lines: usize,
    /// Note name the heading would be extracted to
    pub note_name: String,
}

/// Result of a headings listing
#[derive(Debug, Serialize)]
pub struct HeadingListResult {
    /// Document that was scanned
    pub file: String,
    /// Headings in document order
    pub headings: Vec<HeadingInfo>,
}

impl HeadingListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.headings.is_empty() {
            println!("No headings in {}.", self.file);
            return;
        }

        for h in &self.headings {
            let indent = "  ".repeat(h.depth.saturating_sub(1));
            println!("{:>5}  {indent}{} {}  ({} lines)", h.line, "#".repeat(h.depth), h.title, h.lines);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of checking whether a line can be extracted
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Document that was checked
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Whether the extract command is available for this line
    pub extractable: bool,
    /// Heading title when extractable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.title {
                Some(title) if self.extractable => {
                    println!("{}:{} is a heading: {title}", self.file, self.line);
                },
                _ => println!("{}:{} is not a heading", self.file, self.line),
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Effective configuration
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// Where the configuration came from
    pub source: ConfigSource,
    /// The configuration
    pub config: Config,
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                match &self.source {
                    ConfigSource::Project(path) | ConfigSource::Global(path) => {
                        println!("# {}", path.display());
                    },
                    ConfigSource::Default => println!("# built-in defaults"),
                }
                print!("{}", self.config.to_toml().unwrap_or_default());
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

