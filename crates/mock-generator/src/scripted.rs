//! Scripted generator implementation - replays queued responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use genora_core::{async_trait, GenerationError, Generator, Prompt};

/// A generator that returns queued responses in order and records every
/// prompt it receives.
///
/// Useful for driving a session through exact provider answers, including
/// malformed ones and failures. Once the script runs out, calls fail with
/// [`GenerationError::Unavailable`].
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedGenerator {
    /// Create a new ScriptedGenerator with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that answers once with the given text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_generator::ScriptedGenerator;
    ///
    /// let generator = ScriptedGenerator::with_response(r#"["Title one", "Title two"]"#);
    /// assert_eq!(generator.remaining(), 1);
    /// ```
    pub fn with_response(text: impl Into<String>) -> Self {
        let generator = Self::new();
        generator.push_response(text);
        generator
    }

    /// Create a generator that fails once with the given error.
    pub fn with_error(error: GenerationError) -> Self {
        let generator = Self::new();
        generator.push_error(error);
        generator
    }

    /// Queue a successful response.
    pub fn push_response(&self, text: impl Into<String>) {
        self.lock_responses().push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: GenerationError) {
        self.lock_responses().push_back(Err(error));
    }

    /// Number of queued answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lock_responses().len()
    }

    /// Every prompt received so far, oldest first.
    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of completion calls made.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn lock_responses(
        &self,
    ) -> std::sync::MutexGuard<'_, VecDeque<Result<String, GenerationError>>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.clone());

        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(GenerationError::Unavailable(
                "no scripted response left".to_string(),
            ))
        })
    }

    fn name(&self) -> &str {
        "ScriptedGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genora_core::{GenerationRequest, GenerationResult, ToolId, ToolInputs};

    #[tokio::test]
    async fn test_responses_in_order() {
        let generator = ScriptedGenerator::new();
        generator.push_response("first");
        generator.push_response("second");

        assert_eq!(generator.complete(&Prompt::text("a")).await.unwrap(), "first");
        assert_eq!(generator.complete(&Prompt::text("b")).await.unwrap(), "second");
        assert_eq!(generator.remaining(), 0);
    }

    #[tokio::test]
    async fn test_records_prompts() {
        let generator = ScriptedGenerator::with_response(r#"["Go big"]"#);
        let request = GenerationRequest::new(ToolId::Slogan, ToolInputs::primary("gyms"));

        let result = generator.generate(&request).await.unwrap();
        assert_eq!(
            result,
            Some(GenerationResult::Slogans(vec!["Go big".to_string()]))
        );

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].text.contains("\"gyms\""));
        assert!(prompts[0].format.is_json());
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let generator = ScriptedGenerator::with_error(GenerationError::Timeout);
        assert!(matches!(
            generator.complete(&Prompt::text("a")).await,
            Err(GenerationError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_exhausted_script_fails() {
        let generator = ScriptedGenerator::new();
        assert!(matches!(
            generator.complete(&Prompt::text("a")).await,
            Err(GenerationError::Unavailable(_))
        ));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_generator_name() {
        let generator = ScriptedGenerator::new();
        assert_eq!(generator.name(), "ScriptedGenerator");
        assert!(generator.is_ready().await);
    }
}
