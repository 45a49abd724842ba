//! treemd - write a Markdown tree of a project directory

pub mod error;
pub mod generate;
pub mod icons;
pub mod ignore_set;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use generate::{DEFAULT_OUTPUT_FILE, Generated, GeneratorConfig, generate, write_document};
pub use icons::icon_for;
pub use ignore_set::{DEFAULT_IGNORE_FILE, IgnoreSet, load_ignore_set};
pub use output::{ConsoleReporter, format_timestamp, render_markdown};
pub use tree::{EntryKind, TreeBuilder, TreeDocument, TreeLine};
