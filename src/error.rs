//! Error types for store and command failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The task file exists but does not parse as a task list.
    #[error("malformed task file {}: {source}", path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using the tododo Error type.
pub type Result<T> = std::result::Result<T, Error>;
