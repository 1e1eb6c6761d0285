//! Error types for task store backend operations.

use std::path::PathBuf;

use taskdeck_protocol::{ProtocolError, TaskId};

/// Errors that can occur during backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The targeted task does not exist in the canonical collection.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The simulated failure mode is active.
    ///
    /// Toggled through a [`FailureSwitch`](crate::FailureSwitch) for
    /// testing and demonstration; every operation fails with this error
    /// while the switch is on.
    #[error("the task service is unavailable")]
    Unavailable,

    /// A task could not be constructed from the given input.
    #[error(transparent)]
    InvalidTitle(#[from] ProtocolError),

    /// Failed to read the task store file.
    #[error("failed to read task store at {path}: {source}")]
    StorageRead {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the task store file.
    #[error("failed to parse task store at {path}: {source}")]
    StorageParse {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the task store file.
    #[error("failed to write task store at {path}: {source}")]
    StorageWrite {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the task collection.
    #[error("failed to serialize task store: {0}")]
    StorageSerialize(#[source] serde_json::Error),
}

impl BackendError {
    /// Returns `true` if this error is the simulated transient failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_backend::BackendError;
    ///
    /// assert!(BackendError::Unavailable.is_transient());
    /// ```
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// A specialized Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
