//! Error types for state container operations.

use taskdeck_backend::BackendError;
use taskdeck_protocol::ProtocolError;

/// Errors surfaced by the asynchronous confirmation operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A task title was empty or whitespace-only.
    ///
    /// Raised before any state change or backend call is made.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The backend rejected or failed the confirming call.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<ProtocolError> for StoreError {
    fn from(_: ProtocolError) -> Self {
        Self::EmptyTitle
    }
}

/// A specialized Result type for state container operations.
pub type Result<T> = std::result::Result<T, StoreError>;
