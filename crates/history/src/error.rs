//! Error types for the history store

use thiserror::Error;

/// Result type for history store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur against the history store
///
/// The store never rejects on content; the only failure mode is the backing
/// store being unreachable or broken.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be reached or refused the operation
    #[error("History store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Wraps an underlying failure with context
    pub(crate) fn unavailable(context: &str, source: impl std::fmt::Display) -> Self {
        Self::Unavailable(format!("{}: {}", context, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::unavailable("Failed to insert entry", "disk I/O error");
        assert_eq!(
            err.to_string(),
            "History store unavailable: Failed to insert entry: disk I/O error"
        );
    }
}
