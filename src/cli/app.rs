//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use super::commands;
use mdsplit::VERSION;
use mdsplit::output::OutputMode;

/// mdsplit - Extract a heading section into its own note
#[derive(Parser, Debug)]
#[command(
    name = "mdsplit",
    version,
    about = "Extract a Markdown heading section into its own note",
    long_about = "Move a heading's section into a new note and embed it back in place.\n\n\
                  The heading line stays where it is, followed by an embed marker.\n\
                  The new note is named after the heading and re-leveled so the\n\
                  heading becomes a top-level '#' heading."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract a heading and its sub-content into a new note
    Extract {
        /// Markdown document to extract from
        file: PathBuf,

        #[command(flatten)]
        target: HeadingTarget,

        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List the headings of a document
    Headings {
        /// Markdown document to scan
        file: PathBuf,
    },

    /// Exit successfully if a line can be extracted (is a heading)
    Check {
        /// Markdown document
        file: PathBuf,

        /// Line number (1-based)
        #[arg(short, long)]
        line: usize,
    },

    /// Show the effective configuration
    Config {
        /// Document or folder to resolve configuration for
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show version
    Version,
}

/// Which heading to extract
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct HeadingTarget {
    /// Line number of the heading (1-based)
    #[arg(short, long)]
    pub line: Option<usize>,

    /// Title of the heading (first match)
    #[arg(long)]
    pub heading: Option<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Extract {
            file,
            target,
            dry_run,
        }) => commands::extract(&file, target.line, target.heading, dry_run, output_mode),
        Some(Command::Headings { file }) => commands::headings(&file, output_mode),
        Some(Command::Check { file, line }) => commands::check(&file, line, output_mode),
        Some(Command::Config { path }) => commands::config(&path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("mdsplit v{VERSION}");
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("mdsplit v{VERSION}");
                println!("\nRun 'mdsplit --help' for usage");
                println!("Run 'mdsplit extract <file> --line <n>' to extract a heading");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
