//! Discovery of markdown files under the scan root.

use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::ScanError;

/// Directory names excluded wholesale: VCS metadata, build output,
/// dependency caches and editor state.
pub const SKIP_DIR_NAMES: &[&str] = &[
    ".git",
    ".gradle",
    ".idea",
    ".vscode",
    "target",
    "build",
    "node_modules",
];

/// Agent metadata directory, also excluded.
pub const AGENT_DIR_NAME: &str = ".agent";

/// Documentation file extension.
const DOC_EXTENSION: &str = "md";

/// Whether a single path segment excludes everything beneath it.
fn is_skipped_segment(name: &str) -> bool {
    name == AGENT_DIR_NAME || SKIP_DIR_NAMES.contains(&name)
}

/// Check whether a root-relative path passes through an excluded directory.
pub fn should_skip(rel_path: &Path) -> bool {
    rel_path.components().any(|c| match c {
        Component::Normal(name) => is_skipped_segment(&name.to_string_lossy()),
        _ => false,
    })
}

/// Render a root-relative path with `/` separators on every platform.
pub fn display_relative(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect every `.md` file under `root`, sorted by path.
///
/// Excluded directories are pruned. Entries that cannot be read are skipped
/// with a warning on stderr.
pub fn collect_markdown_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    check_root(root)?;

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Never prune the root itself, even if it is called `build`.
            if e.depth() == 0 {
                return true;
            }
            !(e.file_type().is_dir() && is_skipped_segment(&e.file_name().to_string_lossy()))
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                super::warn(&format!("skipping unreadable path: {}", e));
                continue;
            }
        };

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXTENSION) {
            continue;
        }
        // Follows symlinks, so linked documents are still picked up.
        if !path.is_file() {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        if should_skip(rel) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    match std::fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::RootNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ScanError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(ScanError::RootAccess {
            path: root.to_path_buf(),
            source: e,
        }),
    }
}
