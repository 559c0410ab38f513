//! Line-by-line matching of forbidden terms.

use std::path::Path;

use crate::rules::{allows_compat_reference, Rule};

use super::Violation;

/// Split text into lines, treating `\r\n`, `\r` and `\n` as terminators.
///
/// A trailing terminator does not produce an extra empty line, so numbering
/// matches what an editor shows.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Match a single line against `rules`, in order.
///
/// Returns the rules that fired. The compatibility exception only removes
/// rules flagged `compat_exempt`; the rest of the table still applies.
pub fn match_line<'r>(line: &str, rules: &'r [Rule]) -> Vec<&'r Rule> {
    let lower_line = line.to_lowercase();
    let compat = allows_compat_reference(&lower_line);

    rules
        .iter()
        .filter(|rule| !(compat && rule.spec.compat_exempt))
        .filter(|rule| rule.is_match(line))
        .collect()
}

/// Scan document text and return violations attributed to `rel_path`.
pub fn scan_text(rel_path: &str, text: &str, rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (line_num, line) in split_lines(text).into_iter().enumerate() {
        for rule in match_line(line, rules) {
            violations.push(Violation::new(rel_path, line_num + 1, rule, line));
        }
    }

    violations
}

/// Read a document and scan it.
///
/// Malformed UTF-8 is replaced rather than rejected.
pub fn scan_file(path: &Path, rel_path: &str, rules: &[Rule]) -> std::io::Result<Vec<Violation>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(scan_text(rel_path, &text, rules))
}
