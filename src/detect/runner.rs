//! Scan runner that walks the root and matches every document.

use std::path::{Path, PathBuf};

use crate::rules::{Rule, RULES};

use super::{collect_markdown_files, display_relative, scan_file, DetectionResult, ScanError};

/// Scans a documentation tree against a rule table.
pub struct Runner {
    root: PathBuf,
    rules: &'static [Rule],
}

impl Runner {
    /// Create a runner over `root` using the built-in rule table.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            rules: &RULES,
        }
    }

    /// Scan every markdown file under the root.
    ///
    /// Violations are ordered by file path, then line, then rule. Files that
    /// cannot be read are skipped with a warning.
    pub fn run(&self) -> Result<DetectionResult, ScanError> {
        let mut result = DetectionResult::new();

        for path in collect_markdown_files(&self.root)? {
            let rel = display_relative(path.strip_prefix(&self.root).unwrap_or(&path));
            match scan_file(&path, &rel, self.rules) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.scanned += 1;
                }
                Err(e) => super::warn(&format!("skipping {}: {}", rel, e)),
            }
        }

        Ok(result)
    }
}

/// Scan `root` with the built-in rules.
pub fn scan<P: AsRef<Path>>(root: P) -> Result<DetectionResult, ScanError> {
    Runner::new(root).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_runner_basic() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README.md", "# OpenWorld\n\nBuilt on libbox.\n");
        write(temp.path(), "docs/api.md", "Use RemoteClient\n");
        write(temp.path(), "docs/clean.md", "Nothing to see.\n");

        let result = Runner::new(temp.path()).run().unwrap();
        assert_eq!(result.scanned, 3);
        assert_eq!(result.violations.len(), 2);
        assert_eq!(result.violations[0].file, "README.md");
        assert_eq!(result.violations[0].line, 3);
        assert_eq!(result.violations[1].file, "docs/api.md");
        assert_eq!(result.violations[1].rule, "remote-client-symbol");
    }

    #[test]
    fn test_runner_skip_dirs() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "node_modules/x/README.md", "singbox\n");
        write(temp.path(), ".agent/notes.md", "singbox\n");
        write(temp.path(), "app/build/out.md", "singbox\n");

        let result = scan(temp.path()).unwrap();
        assert!(result.passed());
        assert_eq!(result.scanned, 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_runner_skips_unreadable_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.md", "Built on libbox.\n");
        write(temp.path(), "c.md", "Use RemoteClient\n");
        // A regular file whose first read fails with EIO, even for root.
        std::os::unix::fs::symlink("/proc/self/mem", temp.path().join("b.md")).unwrap();
        assert!(temp.path().join("b.md").is_file());

        let result = scan(temp.path()).unwrap();
        assert_eq!(result.scanned, 2);
        let files: Vec<_> = result.violations.iter().map(|v| v.file.as_str()).collect();
        assert_eq!(files, vec!["a.md", "c.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_runner_skips_file_without_permission() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        write(temp.path(), "locked.md", "singbox\n");
        write(temp.path(), "open.md", "singbox\n");
        let locked = temp.path().join("locked.md");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read(&locked).is_ok() {
            // Permission bits do not apply to root.
            return;
        }

        let result = scan(temp.path()).unwrap();
        assert_eq!(result.scanned, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].file, "open.md");
    }

    #[test]
    fn test_runner_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = scan(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound(_)));
    }
}
