//! Error types for the taskdeck-protocol crate.

use thiserror::Error;

/// Errors that can occur when constructing protocol types.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A task title was empty or whitespace-only.
    #[error("invalid task title: title cannot be empty")]
    InvalidTitle,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_message() {
        let err = ProtocolError::InvalidTitle;
        assert_eq!(err.to_string(), "invalid task title: title cannot be empty");
    }
}
