//! Core types for scan results.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::rules::Rule;

/// Errors that stop a scan before any file is read.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("root directory {0:?} does not exist")]
    RootNotFound(PathBuf),
    #[error("root path {0:?} is not a directory")]
    RootNotDirectory(PathBuf),
    #[error("cannot access root {path:?}: {source}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A forbidden term found on a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Id of the rule that fired.
    pub rule: &'static str,
    /// Regex source of the rule.
    pub pattern: &'static str,
    pub suggestion: &'static str,
    /// The offending line, trimmed.
    pub text: String,
}

impl Violation {
    pub fn new(file: &str, line: usize, rule: &Rule, text: &str) -> Self {
        Self {
            file: file.to_string(),
            line,
            rule: rule.spec.id,
            pattern: rule.pattern(),
            suggestion: rule.suggestion(),
            text: text.trim().to_string(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: forbidden term '{}' -> {}\n    {}",
            self.file, self.line, self.pattern, self.suggestion, self.text
        )
    }
}

/// Results of a scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectionResult {
    pub violations: Vec<Violation>,
    /// Number of markdown files read
    pub scanned: usize,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
