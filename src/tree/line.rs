//! Tree lines and the document that holds them

use std::fmt;

use crate::icons::FOLDER_ICON;

/// Indentation marker repeated once per depth level.
pub const INDENT: &str = "│   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub kind: EntryKind,
    pub icon: &'static str,
    pub name: String,
}

impl TreeLine {
    pub fn dir(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: EntryKind::Dir,
            icon: FOLDER_ICON,
            name: name.into(),
        }
    }

    pub fn file(depth: usize, icon: &'static str, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: EntryKind::File,
            icon,
            name: name.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        write!(f, "{} {}", self.icon, self.name)?;
        if self.is_dir() {
            f.write_str("/")?;
        }
        Ok(())
    }
}

/// The listing in pre-order with counts kept as lines are added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDocument {
    lines: Vec<TreeLine>,
    folders: usize,
    files: usize,
}

impl TreeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TreeLine) {
        match line.kind {
            EntryKind::Dir => self.folders += 1,
            EntryKind::File => self.files += 1,
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[TreeLine] {
        &self.lines
    }

    pub fn folders(&self) -> usize {
        self.folders
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
