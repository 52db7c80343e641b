use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the index adapters and the query boundary.
///
/// Malformed documents are not represented here: a file without an
/// extractable message id is silently skipped during the build, and a
/// per-file read failure is logged and skipped without aborting the batch.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("no snapshot found at {0} (run `build` first)")]
    SnapshotMissing(PathBuf),

    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("snapshot serialization error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result type alias for mailfts operations
pub type Result<T> = std::result::Result<T, Error>;
