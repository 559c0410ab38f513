//! Command-line interface for docterms.

use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::detect::Runner;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// How many directories above the crate manifest the repository root sits.
/// The tool is vendored at `<repo>/tools/docterms`.
const ROOT_LEVELS_UP: usize = 2;

/// Marker that identifies a repository root.
const REPO_MARKER: &str = ".git";

/// Documentation terminology gate.
///
/// Scans every markdown file in the repository for legacy brand names,
/// leaked internal symbol names and deprecated URL schemes, and fails when
/// any are found. Run without arguments from a pre-commit hook or CI.
#[derive(Parser, Debug)]
#[command(name = "docterms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository root to scan (default: derived from the tool location)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Print the rule table and exit
    #[arg(long)]
    pub list_rules: bool,
}

/// Repository root derived from where the tool lives.
pub fn default_root() -> PathBuf {
    resolve_root(Path::new(env!("CARGO_MANIFEST_DIR")))
}

/// Resolve the repository root for a tool installed at `tool_dir`.
///
/// The ancestor `ROOT_LEVELS_UP` levels above is used only when it carries a
/// `.git` marker; otherwise `tool_dir` itself is the root.
pub fn resolve_root(tool_dir: &Path) -> PathBuf {
    tool_dir
        .ancestors()
        .nth(ROOT_LEVELS_UP)
        .filter(|p| p.join(REPO_MARKER).exists())
        .unwrap_or(tool_dir)
        .to_path_buf()
}

fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

/// Run the check, writing the report to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Run the check, writing the report to `out`.
pub fn run_with_output<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<i32> {
    if cli.list_rules {
        report::write_rules(out)?;
        return Ok(EXIT_SUCCESS);
    }

    // Validate format
    if cli.format != "text" && cli.format != "json" {
        print_error(&format!(
            "invalid format {:?}, must be 'text' or 'json'",
            cli.format
        ));
        return Ok(EXIT_ERROR);
    }

    let root = cli.root.clone().unwrap_or_else(default_root);
    let result = match Runner::new(&root).run() {
        Ok(result) => result,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(EXIT_ERROR);
        }
    };

    match cli.format.as_str() {
        "json" => report::write_json(out, &root.to_string_lossy(), &result)?,
        _ => report::write_text(out, &result)?,
    }
    out.flush()?;

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}
