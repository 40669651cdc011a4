//! Error types for the scaffolding pipelines.
//!
//! Each pipeline stage returns an explicit error kind instead of throwing
//! into a catch-all, so the adapter layer (the CLI, or any other host
//! frontend) decides per kind what the user sees.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The given primary file is not a Dart file, so there is nothing
    /// sensible to attach a part to.
    #[error("'{}' is not a .dart file; parts can only be created relative to a Dart file", path.display())]
    InvalidContext { path: PathBuf },

    /// The entered name attempts directory traversal. Rejected before any
    /// file-system call is made.
    #[error("The file name can't contain '..' so the part file can only be in a sub folder.")]
    InvalidName { name: String },

    /// A file already exists at the resolved target path. Nothing was
    /// written.
    #[error("The '{name}' file already exists.")]
    TargetExists { name: String },

    /// Uncategorized file-system failure from read/write/mkdir.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of a pipeline run that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was created at the given path (and, for parts, the primary
    /// file was rewritten).
    Created(PathBuf),
    /// The user dismissed the name prompt; no side effects were performed.
    Cancelled,
}
