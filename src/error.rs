//! Error types for walking and reporting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a tree report.
///
/// Permission-denied listings are not errors: they are rendered inline as a
/// sentinel line and the walk carries on with the siblings.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Root path does not exist.
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Listing a visible directory failed for a reason other than permissions.
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report file failed.
    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Printing to stdout failed.
    #[error("error writing output: {0}")]
    Output(#[source] std::io::Error),

    /// Serializing the tree to JSON failed.
    #[error("error serializing tree: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
