//! Error types for session actions

use thiserror::Error;

/// Result type for session actions
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors a session action can reject with before doing any work
#[derive(Debug, Error)]
pub enum SessionError {
    /// A search was submitted without a title
    #[error("Search title must not be empty")]
    EmptyTitle,
}
