//! The Generator trait definition.

use async_trait::async_trait;
use tracing::debug;

use crate::decode::{decode_result, decode_trending};
use crate::error::GenerationError;
use crate::prompt::{build_prompt, trending_prompt, Prompt};
use crate::request::GenerationRequest;
use crate::result::{GenerationResult, TrendingTopics};

/// A backend that turns prompts into text completions.
///
/// Implementations only need [`complete`](Generator::complete); prompt
/// construction and response decoding are shared by the provided methods.
/// This trait is object-safe and can be used with `Arc<dyn Generator>`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Issue exactly one completion call for the prompt and return the raw
    /// response text.
    ///
    /// No retries are performed.
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError>;

    /// Get a human-readable name for this generator implementation.
    fn name(&self) -> &str;

    /// Check if the generator is ready to accept requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }

    /// Run one tool request.
    ///
    /// Returns `Ok(None)` when the provider answered but the answer could not
    /// be decoded into the tool's result shape.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Option<GenerationResult>, GenerationError> {
        let prompt = build_prompt(request);
        debug!(tool = %request.tool, generator = self.name(), "Generating");
        let text = self.complete(&prompt).await?;
        Ok(decode_result(request.tool, &text))
    }

    /// Fetch the current trending topics.
    async fn trending_topics(&self) -> Result<Option<TrendingTopics>, GenerationError> {
        let text = self.complete(&trending_prompt()).await?;
        Ok(decode_trending(&text))
    }
}
