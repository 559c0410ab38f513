//! Detection of forbidden documentation terms.

mod files;
mod patterns;
mod runner;
mod types;

use colored::*;

pub use files::{
    collect_markdown_files, display_relative, should_skip, AGENT_DIR_NAME, SKIP_DIR_NAMES,
};
pub use patterns::{match_line, scan_file, scan_text, split_lines};
pub use runner::{scan, Runner};
pub use types::{DetectionResult, ScanError, Violation};

/// Print a non-fatal diagnostic to stderr.
pub(crate) fn warn(message: &str) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}
