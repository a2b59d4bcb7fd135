use std::path::PathBuf;

use thiserror::Error;

/// Failures at the backing-store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but does not parse as a task list. Surfaced
    /// rather than treated as empty so callers can decide whether to
    /// reset or abort.
    #[error("backing store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures from controller operations. Validation errors leave the
/// list untouched; `Store` means the in-memory mutation took effect
/// but the write behind it failed.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task text cannot be empty")]
    EmptyText,

    #[error("no task at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
