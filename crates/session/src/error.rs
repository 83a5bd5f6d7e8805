//! Error types for session operations.

use storage::StoreError;
use thiserror::Error;

/// Errors that can occur while driving a tool session.
///
/// Generation failures are not errors at this level: they move the session
/// to [`SessionState::Failed`](crate::SessionState::Failed) instead.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A submission is already in flight.
    #[error("a generation is already in progress")]
    Busy,

    /// Saved state could not be written.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
