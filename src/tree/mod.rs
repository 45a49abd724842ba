//! Directory tree building
//!
//! `TreeBuilder` walks a directory top-down and produces a `TreeDocument`:
//! the ordered display lines plus folder and file counts.

mod builder;
mod line;

pub use builder::{TreeBuilder, dir_name};
pub use line::{EntryKind, INDENT, TreeDocument, TreeLine};
