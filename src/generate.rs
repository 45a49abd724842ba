//! The generation pipeline: load ignore set, build tree, render document

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{Result, TreeError};
use crate::ignore_set::{DEFAULT_IGNORE_FILE, IgnoreSet, load_ignore_set};
use crate::output::render_markdown;
use crate::tree::{TreeBuilder, TreeDocument, dir_name};

/// Default name of the generated document, written at the root.
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub root: PathBuf,
    /// Output file name, relative to `root`
    pub output_file: String,
    /// Ignore override file name, relative to `root`
    pub ignore_file: String,
}

impl GeneratorConfig {
    /// Where the document is written. Absolute names and `..` components
    /// are rejected so the file always lands under `root`.
    pub fn output_path(&self) -> Result<PathBuf> {
        let name = Path::new(&self.output_file);
        let escapes = name
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || self.output_file.is_empty() {
            return Err(TreeError::OutputOutsideRoot {
                name: self.output_file.clone(),
            });
        }
        Ok(self.root.join(name))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
        }
    }
}

/// Result of a run, before anything is written.
#[derive(Debug, Clone)]
pub struct Generated {
    pub project_name: String,
    pub document: TreeDocument,
    pub markdown: String,
}

impl Generated {
    pub fn line_count(&self) -> usize {
        self.markdown.lines().count()
    }
}

pub fn project_name(root: &Path) -> String {
    dir_name(root)
}

/// Run the pipeline against `config.root`.
pub fn generate(config: &GeneratorConfig, generated_at: NaiveDateTime) -> Result<Generated> {
    let ignore = load_ignore_set(&config.root, &config.ignore_file, IgnoreSet::builtin());
    let document = TreeBuilder::new(&ignore).build(&config.root)?;
    debug!(
        folders = document.folders(),
        files = document.files(),
        "tree built"
    );

    let project_name = project_name(&config.root);
    let markdown = render_markdown(&project_name, &document, generated_at);

    Ok(Generated {
        project_name,
        document,
        markdown,
    })
}

/// Write the rendered document, replacing any existing file.
pub fn write_document(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).map_err(|source| TreeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
