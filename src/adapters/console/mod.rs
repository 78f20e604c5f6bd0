//! Console notifier
//!
//! Implements `Notifier` for the terminal. In human mode notices are printed
//! in colour (errors to stderr); in JSON mode stdout is reserved for the
//! command's report, so notices become one JSON object per line on stderr.

use colored::Colorize;

use crate::core::ports::{Notice, NoticeLevel, Notifier};
use crate::output::OutputMode;

/// Prints notices to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    mode: OutputMode,
}

impl ConsoleNotifier {
    /// Create a notifier for the given output mode
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Format a notice for human output
    #[must_use]
    pub fn format_human(notice: &Notice) -> String {
        match notice.level {
            NoticeLevel::Info => notice.message.clone(),
            NoticeLevel::Success => notice.message.green().to_string(),
            NoticeLevel::Error => format!("{} {}", "error:".red().bold(), notice.message),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match self.mode {
            OutputMode::Human => match notice.level {
                NoticeLevel::Error => eprintln!("{}", Self::format_human(notice)),
                _ => println!("{}", Self::format_human(notice)),
            },
            OutputMode::Json => {
                eprintln!("{}", serde_json::to_string(notice).unwrap_or_default());
            },
        }
    }
}
