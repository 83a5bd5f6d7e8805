//! Error types for generation calls.

use thiserror::Error;

/// Errors that can occur while talking to a generation backend.
///
/// These never reach the user as-is: the session layer collapses every
/// variant into a single generic failure message and only logs the cause.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The backend is misconfigured (missing key, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be delivered.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered but the body was not usable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// The backend is temporarily unavailable.
    #[error("generator unavailable: {0}")]
    Unavailable(String),
}
