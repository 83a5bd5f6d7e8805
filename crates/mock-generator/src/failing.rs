//! Failing generator implementation - every call errors.

use genora_core::{async_trait, GenerationError, Generator, Prompt};

/// The kind of failure a [`FailingGenerator`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request never reached the provider.
    Network,
    /// Provider answered with HTTP 500.
    ServerError,
    /// Request timed out.
    Timeout,
}

/// A generator whose every call fails.
///
/// Useful for testing the failure path without network access.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    kind: FailureKind,
}

impl FailingGenerator {
    /// Create a new FailingGenerator with the given failure kind.
    pub fn new(kind: FailureKind) -> Self {
        Self { kind }
    }

    /// Create a generator that fails as if offline.
    pub fn offline() -> Self {
        Self::new(FailureKind::Network)
    }

    /// The failure this generator produces.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::offline()
    }
}

#[async_trait]
impl Generator for FailingGenerator {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
        Err(match self.kind {
            FailureKind::Network => {
                GenerationError::Network("connection refused".to_string())
            }
            FailureKind::ServerError => GenerationError::Api {
                status: 500,
                message: "Internal error".to_string(),
            },
            FailureKind::Timeout => GenerationError::Timeout,
        })
    }

    fn name(&self) -> &str {
        "FailingGenerator"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
