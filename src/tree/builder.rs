//! TreeBuilder - walks a directory and collects display lines

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Result, TreeError};
use crate::icons::icon_for;
use crate::ignore_set::IgnoreSet;

use super::line::{TreeDocument, TreeLine};

/// Builds a pre-order listing: each directory line, then its files, then
/// its subdirectories. Siblings are sorted by name (byte order).
pub struct TreeBuilder<'a> {
    ignore: &'a IgnoreSet,
}

/// Entries of one directory, split and sorted.
struct DirListing {
    subdirs: Vec<(String, PathBuf)>,
    files: Vec<String>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(ignore: &'a IgnoreSet) -> Self {
        Self { ignore }
    }

    /// Walk `root` and return the finished document.
    ///
    /// Any directory that cannot be read aborts the walk.
    pub fn build(&self, root: &Path) -> Result<TreeDocument> {
        let mut doc = TreeDocument::new();
        self.walk_dir(root, &dir_name(root), 0, &mut doc)?;
        Ok(doc)
    }

    fn walk_dir(
        &self,
        path: &Path,
        name: &str,
        depth: usize,
        doc: &mut TreeDocument,
    ) -> Result<()> {
        trace!(path = %path.display(), depth, "visiting directory");
        let listing = self.read_dir(path)?;

        doc.push(TreeLine::dir(depth, name));
        for file in listing.files {
            doc.push(TreeLine::file(depth + 1, icon_for(&file), file));
        }

        for (sub_name, sub_path) in listing.subdirs {
            self.walk_dir(&sub_path, &sub_name, depth + 1, doc)?;
        }

        Ok(())
    }

    /// Read, filter and sort the entries of `path`.
    ///
    /// A symlink to a directory is matched against the directory ignore set
    /// but never entered and never listed. Other symlinks, including broken
    /// ones, are listed as files.
    fn read_dir(&self, path: &Path) -> Result<DirListing> {
        let read_err = |source| TreeError::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(read_err)? {
            entries.push(entry.map_err(read_err)?);
        }
        entries.sort_by_key(|e| e.file_name());

        let mut listing = DirListing {
            subdirs: Vec::new(),
            files: Vec::new(),
        };

        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = entry.file_type().map_err(read_err)?;
            let linked_dir = file_type.is_symlink() && entry.path().is_dir();

            if file_type.is_dir() || linked_dir {
                if self.ignore.ignores_dir(&name) {
                    trace!(dir = %name, "skipping ignored directory");
                    continue;
                }
                if linked_dir {
                    trace!(dir = %name, "not following directory symlink");
                    continue;
                }
                listing.subdirs.push((name, entry.path()));
            } else if !self.ignore.ignores_file(&name) {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }
}

/// Name shown for a directory, defaulting to "." when the path has
/// no final component.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
