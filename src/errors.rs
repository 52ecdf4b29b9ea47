//! Error types for tree comparison
//!
//! The comparison engine never guesses: a path that cannot be listed, stat'ed or read
//! aborts the whole run with a [`CompareError`] naming the path and the failed operation.
//! The command layer wraps these into `anyhow` errors for reporting.

use std::path::PathBuf;
use thiserror::Error;

pub type CompareResult<T> = Result<T, CompareError>;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error("failed to {op} {}: {source}", .path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl CompareError {
    pub fn filesystem(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompareError::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }

    /// Root validation failures are reported before any comparison begins
    pub fn is_invalid_root(&self) -> bool {
        matches!(
            self,
            CompareError::NotFound(_) | CompareError::NotADirectory(_)
        )
    }
}
