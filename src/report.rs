//! Output formatting for scan results.
//!
//! Supports two output formats:
//! - Text: the line-oriented report CI logs and pre-commit hooks show
//! - JSON: structured output for programmatic consumption

use serde::Serialize;
use std::io::{self, Write};

use crate::detect::{DetectionResult, Violation};
use crate::rules::{RuleSpec, COMPAT_PHRASES, RULE_SPECS};

pub const PASSED_MESSAGE: &str = "Documentation terminology check passed.";
pub const FAILED_MESSAGE: &str = "Documentation terminology check failed.";

// =============================================================================
// Text Format
// =============================================================================

/// Render the text report.
///
/// On failure: header, blank line, then each violation with a blank line
/// between consecutive reports.
pub fn render_text(result: &DetectionResult) -> String {
    if result.passed() {
        return format!("{}\n", PASSED_MESSAGE);
    }

    let body = result
        .violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}\n", FAILED_MESSAGE, body)
}

/// Write the text report to `out`.
pub fn write_text<W: Write>(out: &mut W, result: &DetectionResult) -> io::Result<()> {
    out.write_all(render_text(result).as_bytes())
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub root: String,
    pub passed: bool,
    pub files_scanned: usize,
    pub violations: &'a [Violation],
}

/// Write results in JSON format.
pub fn write_json<W: Write>(
    out: &mut W,
    root: &str,
    result: &DetectionResult,
) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        root: root.to_string(),
        passed: result.passed(),
        files_scanned: result.scanned,
        violations: &result.violations,
    };

    let json = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// =============================================================================
// Rule listing
// =============================================================================

fn case_label(spec: &RuleSpec) -> &'static str {
    if spec.case_insensitive {
        "ignore-case"
    } else {
        "exact-case"
    }
}

/// Print the rule table and the compatibility phrases.
pub fn write_rules<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Forbidden terms:")?;
    writeln!(out)?;
    for spec in RULE_SPECS {
        writeln!(
            out,
            "  {:<22} {:<12} {:<26} -> {}",
            spec.id,
            case_label(spec),
            spec.pattern,
            spec.suggestion
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Compatibility phrases (allow the bare brand name on the same line):")?;
    writeln!(out)?;
    for phrase in COMPAT_PHRASES {
        writeln!(out, "  {}", phrase)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RULES;

    fn sample() -> DetectionResult {
        DetectionResult {
            violations: vec![
                Violation::new("README.md", 2, &RULES[0], "We use sing-box."),
                Violation::new("docs/a.md", 9, &RULES[7], " kunbox://import?url=x "),
            ],
            scanned: 2,
        }
    }

    #[test]
    fn test_render_passed() {
        let result = DetectionResult::new();
        assert_eq!(render_text(&result), "Documentation terminology check passed.\n");
    }

    #[test]
    fn test_render_failed() {
        let expected = "Documentation terminology check failed.\n\
\n\
README.md:2: forbidden term '\\bsing-box\\b' -> Use OpenWorldCore terminology\n\
\x20   We use sing-box.\n\
\n\
docs/a.md:9: forbidden term 'kunbox://import\\?url=' -> Use kunbox://install-config?url=\n\
\x20   kunbox://import?url=x\n";
        assert_eq!(render_text(&sample()), expected);
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_json(&mut buf, "/repo", &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["passed"], false);
        assert_eq!(value["files_scanned"], 2);
        assert_eq!(value["root"], "/repo");
        assert_eq!(value["violations"][1]["rule"], "import-url-scheme");
        assert_eq!(value["violations"][1]["line"], 9);
        assert_eq!(value["violations"][1]["text"], "kunbox://import?url=x");
    }

    #[test]
    fn test_write_rules_lists_every_rule() {
        let mut buf = Vec::new();
        write_rules(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for spec in RULE_SPECS {
            assert!(text.contains(spec.pattern));
        }
        assert!(text.contains("compatible with sing-box json"));
    }
}
