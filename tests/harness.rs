//! Test harness for treemd integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// The project lives in a named subdirectory so its title is predictable.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("project")).expect("Failed to create project dir");
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }
}

pub fn run_treemd(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_treemd");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run treemd");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// The fenced tree block of a generated document, one entry per line.
pub fn tree_lines(document: &str) -> Vec<String> {
    document
        .lines()
        .skip_while(|l| *l != "```")
        .skip(1)
        .take_while(|l| *l != "```")
        .map(str::to_string)
        .collect()
}

/// Document with the timestamp line removed.
pub fn without_timestamp(document: &str) -> String {
    document
        .lines()
        .filter(|l| !l.starts_with("> *Generated automatically on"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
        assert!(dir.path().ends_with("project"));
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("src/main.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_tree_lines_extracts_block() {
        let doc = "# t\n\n```\na\nb\n```\n\nrest\n";
        assert_eq!(tree_lines(doc), vec!["a", "b"]);
    }
}
