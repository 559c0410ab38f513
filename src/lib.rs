//! docterms - documentation terminology gate.
//!
//! Scans the markdown files of a repository for forbidden terms: legacy
//! brand names, internal symbol names that leaked into docs, and deprecated
//! URL schemes. Each hit is reported with file, line and a suggested
//! replacement; any hit fails the check.
//!
//! # Architecture
//!
//! - `rules`: the forbidden-term table and the compatibility phrases
//! - `detect`: file discovery, line matching and the scan runner
//! - `report`: output formatting (text, JSON)
//! - `cli`: argument parsing and root resolution
//!
//! The scan itself takes the root explicitly:
//!
//! ```no_run
//! let result = docterms::scan("/path/to/repo").unwrap();
//! for v in &result.violations {
//!     println!("{}", v);
//! }
//! ```

pub mod cli;
pub mod detect;
pub mod report;
pub mod rules;

pub use detect::{scan, DetectionResult, Runner, ScanError, Violation};
pub use rules::{Rule, RuleSpec, COMPAT_PHRASES, RULES, RULE_SPECS};
