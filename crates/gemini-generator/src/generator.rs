//! GeminiGenerator implementation using the Gemini REST API.

use genora_core::{async_trait, GenerationError, Generator, OutputFormat, Prompt};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiGeneratorConfig;

/// A generator that uses Google's Gemini API.
///
/// Each call is a single attempt with no retries. The configured timeout
/// bounds the whole request; expiry surfaces as [`GenerationError::Timeout`].
pub struct GeminiGenerator {
    client: Client,
    config: GeminiGeneratorConfig,
}

impl GeminiGenerator {
    /// Create a new GeminiGenerator with the given configuration.
    pub fn new(config: GeminiGeneratorConfig) -> Result<Self, GenerationError> {
        if config.api_key.trim().is_empty() {
            return Err(GenerationError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                GenerationError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "GeminiGenerator initialized with model: {}, timeout: {:?}",
            config.model, config.timeout
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiGenerator from environment variables.
    ///
    /// See [`GeminiGeneratorConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, GenerationError> {
        let config = GeminiGeneratorConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiGeneratorConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the request body for a prompt.
    fn build_request(&self, prompt: &Prompt) -> GenerateContentRequest {
        let mut generation_config = GenerationConfig {
            temperature: self.config.temperature,
            ..Default::default()
        };

        match &prompt.format {
            OutputFormat::Text => {}
            OutputFormat::Json => {
                generation_config.response_mime_type = Some("application/json".to_string());
            }
            OutputFormat::JsonSchema(schema) => {
                generation_config.response_mime_type = Some("application/json".to_string());
                generation_config.response_schema = Some(schema.clone());
            }
        }

        GenerateContentRequest {
            contents: vec![Content::user(prompt.text.clone())],
            generation_config: (!generation_config.is_empty()).then_some(generation_config),
        }
    }
}

fn map_send_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Network(format!("Failed to send request: {}", e))
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let request = self.build_request(prompt);

        debug!("Sending request to Gemini API: {:?}", request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            warn!("Gemini API error ({}): {}", status.as_u16(), message);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout
            } else {
                GenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        debug!("Received response from Gemini API: {:?}", completion);

        if let Some(usage) = &completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        completion.text().ok_or_else(|| {
            let reason = completion
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            warn!("No content in Gemini response: {}", reason);
            GenerationError::InvalidResponse(format!("no content in response ({})", reason))
        })
    }

    fn name(&self) -> &str {
        "GeminiGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genora_core::{build_prompt, GenerationRequest, GenerationResult, ToolId, ToolInputs};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn generator_for(server: &MockServer) -> GeminiGenerator {
        let config = GeminiGeneratorConfig::builder()
            .api_key("test-key")
            .api_url(server.uri())
            .build();
        GeminiGenerator::new(config).unwrap()
    }

    fn text_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        }))
    }

    #[test]
    fn test_rejects_empty_key() {
        let config = GeminiGeneratorConfig::builder().build();
        assert!(matches!(
            GeminiGenerator::new(config),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_generator_name() {
        let config = GeminiGeneratorConfig::builder().api_key("test-key").build();
        let generator = GeminiGenerator::new(config).unwrap();
        assert_eq!(generator.name(), "GeminiGenerator");
    }

    #[test]
    fn test_build_request_formats() {
        let config = GeminiGeneratorConfig::builder().api_key("test-key").build();
        let generator = GeminiGenerator::new(config).unwrap();

        let description = build_prompt(&GenerationRequest::new(
            ToolId::Description,
            ToolInputs::primary("cats"),
        ));
        let request = generator.build_request(&description);
        assert!(request.generation_config.is_none());

        let titles = build_prompt(&GenerationRequest::new(
            ToolId::Title,
            ToolInputs::primary("cats"),
        ));
        let request = generator.build_request(&titles);
        let config = request.generation_config.unwrap();
        assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
        assert!(config.response_schema.is_none());

        let hashtags = build_prompt(&GenerationRequest::new(
            ToolId::Hashtag,
            ToolInputs::primary("cats"),
        ));
        let request = generator.build_request(&hashtags);
        let schema = request.generation_config.unwrap().response_schema.unwrap();
        assert_eq!(schema["properties"]["high"]["type"], "ARRAY");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = GeminiGeneratorConfig::builder()
            .api_key("k")
            .api_url("http://localhost:1234/")
            .build();
        let generator = GeminiGenerator::new(config).unwrap();
        assert_eq!(
            generator.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_titles_from_fenced_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(text_response("```json\n[\"A\", \"B\", \"C\"]\n```"))
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let request = GenerationRequest::new(ToolId::Title, ToolInputs::primary("cats"));
        let result = generator.generate(&request).await.unwrap();

        assert_eq!(
            result,
            Some(GenerationResult::Titles(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string()
            ]))
        );
    }

    #[tokio::test]
    async fn test_generate_description_plain_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(text_response("Welcome to the channel! #cats"))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let request = GenerationRequest::new(ToolId::Description, ToolInputs::primary("cats"));
        let result = generator.generate(&request).await.unwrap();

        assert_eq!(
            result,
            Some(GenerationResult::Description(
                "Welcome to the channel! #cats".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(text_response("I cannot help with that."))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let request = GenerationRequest::new(ToolId::Score, ToolInputs::new("t", "d", "a,b"));
        assert_eq!(generator.generate(&request).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_api_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
            })))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let err = generator.complete(&Prompt::text("hi")).await.unwrap_err();
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        assert!(matches!(
            generator.complete(&Prompt::text("hi")).await,
            Err(GenerationError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(text_response("late").set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let config = GeminiGeneratorConfig::builder()
            .api_key("test-key")
            .api_url(server.uri())
            .timeout(Duration::from_millis(50))
            .build();
        let generator = GeminiGenerator::new(config).unwrap();

        assert!(matches!(
            generator.complete(&Prompt::text("hi")).await,
            Err(GenerationError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let config = GeminiGeneratorConfig::builder()
            .api_key("test-key")
            .api_url("http://127.0.0.1:9")
            .build();
        let generator = GeminiGenerator::new(config).unwrap();

        assert!(matches!(
            generator.complete(&Prompt::text("hi")).await,
            Err(GenerationError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_trending_topics() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(text_response(
                r#"{"youtube": ["AI tools", "Speedruns"], "instagram": ["Reels tips"]}"#,
            ))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let topics = generator.trending_topics().await.unwrap().unwrap();
        assert_eq!(topics.youtube.len(), 2);
        assert_eq!(topics.instagram, vec!["Reels tips"]);
    }
}
