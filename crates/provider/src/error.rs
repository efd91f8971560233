//! Error types for provider lookups

use thiserror::Error;

/// Result type for provider lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur during a lookup
///
/// Display strings are the user-visible messages, surfaced verbatim by the
/// session when a lookup fails.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered but had no record for the title
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// Transport failure or non-success HTTP status
    #[error("Could not connect to movie database.")]
    Unreachable,

    /// Anything else that went wrong during the call
    #[error("Something went wrong. Error: {0}")]
    Unexpected(String),
}
