//! Ignore sets: names of directories and files left out of the tree
//!
//! Patterns are literal names, never globs. A `.treeignore` file at the
//! project root adds to the built-in defaults:
//!
//! ```text
//! # comment
//! build/        <- directory name
//! secrets.env   <- file name
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Default name of the override file looked up at the project root.
pub const DEFAULT_IGNORE_FILE: &str = ".treeignore";

/// Version control, dependency caches and build output.
const BUILTIN_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "node_modules",
    ".idea",
    ".vscode",
    ".next",
    "dist",
    "build",
    "target",
];

/// OS artifacts and generator leftovers.
const BUILTIN_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "__init__.py", "generate_tree.py"];

/// Directory and file names excluded from traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    pub dirs: BTreeSet<String>,
    pub files: BTreeSet<String>,
}

impl IgnoreSet {
    /// An ignore set with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in defaults.
    pub fn builtin() -> Self {
        Self {
            dirs: BUILTIN_DIRS.iter().map(|s| s.to_string()).collect(),
            files: BUILTIN_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn ignores_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    pub fn ignores_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Add the patterns in `text` to this set.
    ///
    /// Lines are trimmed; blank lines and `#` comments are skipped. A line
    /// ending in a path separator names a directory (separators stripped),
    /// anything else names a file.
    pub fn parse_patterns(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.ends_with(is_separator) {
                let name = line.trim_end_matches(is_separator);
                if !name.is_empty() {
                    self.dirs.insert(name.to_string());
                }
            } else {
                self.files.insert(line.to_string());
            }
        }
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Load `root/file_name` on top of `base`.
///
/// Best effort: a missing, unreadable or non-UTF-8 file leaves `base`
/// untouched. This never fails.
pub fn load_ignore_set(root: &Path, file_name: &str, base: IgnoreSet) -> IgnoreSet {
    let path = root.join(file_name);
    if !path.exists() {
        debug!(path = %path.display(), "no ignore file");
        return base;
    }

    match fs::read_to_string(&path) {
        Ok(text) => {
            let mut set = base;
            set.parse_patterns(&text);
            debug!(
                path = %path.display(),
                dirs = set.dirs.len(),
                files = set.files.len(),
                "loaded ignore file"
            );
            set
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unreadable ignore file");
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_defaults() {
        let set = IgnoreSet::builtin();
        assert!(set.ignores_dir(".git"));
        assert!(set.ignores_dir("node_modules"));
        assert!(set.ignores_dir("target"));
        assert!(set.ignores_file(".DS_Store"));
        assert!(set.ignores_file("Thumbs.db"));
        assert!(!set.ignores_dir("src"));
        // The two sets are independent
        assert!(!set.ignores_file("build"));
        assert!(!set.ignores_dir(".DS_Store"));
    }

    #[test]
    fn test_parse_patterns() {
        let mut set = IgnoreSet::empty();
        set.parse_patterns("# comment\n\nbuild/\n  logs//  \nsecret.txt\n*.log\n");

        assert_eq!(
            set.dirs.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["build", "logs"]
        );
        assert_eq!(
            set.files.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["*.log", "secret.txt"]
        );
    }

    #[test]
    fn test_parse_patterns_is_literal() {
        let mut set = IgnoreSet::empty();
        set.parse_patterns("build/\n*.log\n");
        assert!(set.ignores_file("*.log"));
        assert!(!set.ignores_file("app.log"));
    }

    #[test]
    fn test_parse_patterns_backslash_dir() {
        let mut set = IgnoreSet::empty();
        set.parse_patterns("out\\\n/\n");
        assert!(set.ignores_dir("out"));
        assert!(!set.ignores_dir(""));
        assert!(set.files.is_empty());
    }

    #[test]
    fn test_parse_patterns_crlf() {
        let mut set = IgnoreSet::empty();
        set.parse_patterns("cache/\r\nnotes.txt\r\n");
        assert!(set.ignores_dir("cache"));
        assert!(set.ignores_file("notes.txt"));
    }

    #[test]
    fn test_load_missing_file_returns_base() {
        let dir = TempDir::new().unwrap();
        let set = load_ignore_set(dir.path(), DEFAULT_IGNORE_FILE, IgnoreSet::builtin());
        assert_eq!(set, IgnoreSet::builtin());
    }

    #[test]
    fn test_load_merges_with_base() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".treeignore"), "docs/\nnotes.md\n").unwrap();

        let set = load_ignore_set(dir.path(), ".treeignore", IgnoreSet::builtin());
        assert!(set.ignores_dir("docs"));
        assert!(set.ignores_file("notes.md"));
        assert!(set.ignores_dir(".git"));
    }

    #[test]
    fn test_load_invalid_utf8_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".treeignore"), b"docs/\n\xff\xfe\n").unwrap();

        let set = load_ignore_set(dir.path(), ".treeignore", IgnoreSet::builtin());
        assert_eq!(set, IgnoreSet::builtin());
    }

    #[test]
    fn test_load_directory_in_place_of_file_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".treeignore")).unwrap();

        let set = load_ignore_set(dir.path(), ".treeignore", IgnoreSet::builtin());
        assert_eq!(set, IgnoreSet::builtin());
    }
}
