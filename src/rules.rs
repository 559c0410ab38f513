//! Forbidden-term rule table.
//!
//! Each rule pairs a regex with a remediation hint. The table is literal data
//! so it can be inspected (`--list-rules`) and tested without touching the
//! traversal code. Order matters only for output: rules fire in table order
//! within a single line.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Phrases that mark a legitimate reference to the external, compatible
/// config format. Compared against the lowercased line.
pub const COMPAT_PHRASES: &[&str] = &[
    "sing-box json (compatible)",
    "sing-box json（兼容）",
    "compatible with sing-box json",
];

/// Static description of a forbidden term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleSpec {
    /// Stable identifier, used in JSON output.
    pub id: &'static str,
    /// Regex source. Reported verbatim in violations.
    pub pattern: &'static str,
    pub case_insensitive: bool,
    pub suggestion: &'static str,
    /// Skipped on lines that contain one of [`COMPAT_PHRASES`].
    pub compat_exempt: bool,
}

/// The rule table, in evaluation order.
pub const RULE_SPECS: &[RuleSpec] = &[
    RuleSpec {
        id: "legacy-brand",
        pattern: r"\bsing-box\b",
        case_insensitive: true,
        suggestion: "Use OpenWorldCore terminology",
        compat_exempt: true,
    },
    RuleSpec {
        id: "legacy-brand-compact",
        pattern: r"\bsingbox\b",
        case_insensitive: true,
        suggestion: "Use OpenWorldCore terminology",
        compat_exempt: false,
    },
    RuleSpec {
        id: "legacy-library",
        pattern: r"\blibbox\b",
        case_insensitive: true,
        suggestion: "Use OpenWorldCore terminology",
        compat_exempt: false,
    },
    RuleSpec {
        id: "bridge-symbol",
        pattern: r"\bCoreBridge\b",
        case_insensitive: false,
        suggestion: "Use real symbol names (e.g., SingBoxCore/Libbox bridge)",
        compat_exempt: false,
    },
    RuleSpec {
        id: "remote-client-symbol",
        pattern: r"\bRemoteClient\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldRemote",
        compat_exempt: false,
    },
    RuleSpec {
        id: "ipc-service-symbol",
        pattern: r"\bIpcService\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldIpcService",
        compat_exempt: false,
    },
    RuleSpec {
        id: "ipc-hub-symbol",
        pattern: r"\bIpcHub\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldIpcHub",
        compat_exempt: false,
    },
    RuleSpec {
        id: "import-url-scheme",
        pattern: r"kunbox://import\?url=",
        case_insensitive: true,
        suggestion: "Use kunbox://install-config?url=",
        compat_exempt: false,
    },
    RuleSpec {
        id: "legacy-anchor",
        pattern: r"#kunbox-for-android",
        case_insensitive: true,
        suggestion: "Use #openworld-for-android",
        compat_exempt: false,
    },
    RuleSpec {
        id: "service-class",
        pattern: r"\bSingBoxService\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldService",
        compat_exempt: false,
    },
    RuleSpec {
        id: "ipc-service-class",
        pattern: r"\bSingBoxIpcService\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldIpcService",
        compat_exempt: false,
    },
    RuleSpec {
        id: "ipc-hub-class",
        pattern: r"\bSingBoxIpcHub\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldIpcHub",
        compat_exempt: false,
    },
    RuleSpec {
        id: "remote-class",
        pattern: r"\bSingBoxRemote\b",
        case_insensitive: false,
        suggestion: "Use OpenWorldRemote",
        compat_exempt: false,
    },
];

/// A rule with its regex compiled.
#[derive(Debug, Clone)]
pub struct Rule {
    pub spec: &'static RuleSpec,
    regex: Regex,
}

impl Rule {
    /// Compile a rule from its static description.
    pub fn compile(spec: &'static RuleSpec) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(spec.pattern)
            .case_insensitive(spec.case_insensitive)
            .build()?;
        Ok(Self { spec, regex })
    }

    /// Whether the rule matches anywhere in `line`.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Regex source as written in the table.
    pub fn pattern(&self) -> &'static str {
        self.spec.pattern
    }

    pub fn suggestion(&self) -> &'static str {
        self.spec.suggestion
    }
}

lazy_static! {
    /// Compiled rule table. The patterns are constants, so a failure here is
    /// a bug in [`RULE_SPECS`] and is caught by the tests below.
    pub static ref RULES: Vec<Rule> = RULE_SPECS
        .iter()
        .map(|spec| Rule::compile(spec).unwrap())
        .collect();
}

/// Check whether a line references the compatible config format.
///
/// `lower_line` must already be lowercased.
pub fn allows_compat_reference(lower_line: &str) -> bool {
    COMPAT_PHRASES.iter().any(|p| lower_line.contains(p))
}
