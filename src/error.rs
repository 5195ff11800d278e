// src/error.rs
use std::path::PathBuf;

/// Failures raised by a file tree oracle.
///
/// The statistic never handles these itself; they are passed through to the caller.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("No project available at {}: {reason}", path.display())]
    Unavailable { path: PathBuf, reason: String },

    #[error("Invalid content root pattern '{pattern}': {source}")]
    InvalidRoot {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid ignore rules for {}: {message}", path.display())]
    Ignore { path: PathBuf, message: String },

    #[error("Failed to traverse project tree: {0}")]
    Traversal(#[from] walkdir::Error),
}
