//! Error types for tree generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Problems with the ignore file are never reported here;
/// the loader falls back to the built-in defaults instead.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output file '{name}' must be a path inside the project directory")]
    OutputOutsideRoot { name: String },
}

pub type Result<T> = std::result::Result<T, TreeError>;
