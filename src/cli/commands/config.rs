//! Config command - show the effective configuration

use std::path::Path;
use std::process::ExitCode;

use mdsplit::config::Config;
use mdsplit::output::{ConfigReport, OutputMode};

/// Print the configuration that applies to `path`
pub fn config(path: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let (config, source) = Config::load_for(path)?;
    ConfigReport { source, config }.render(mode);
    Ok(ExitCode::SUCCESS)
}
