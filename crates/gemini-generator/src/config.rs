//! Configuration for GeminiGenerator.

use genora_core::GenerationError;
use std::env;
use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for GeminiGenerator.
#[derive(Debug, Clone)]
pub struct GeminiGeneratorConfig {
    /// Gemini API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Upper bound on one request, connect to last byte.
    pub timeout: Duration,

    /// Temperature for generation (0.0 - 2.0). Provider default when unset.
    pub temperature: Option<f32>,
}

impl Default for GeminiGeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: None,
        }
    }
}

impl GeminiGeneratorConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEMINI_API_KEY` - API key for authentication (`API_KEY` is accepted
    ///   as a fallback)
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash)
    /// - `GEMINI_TIMEOUT_SECS` - Request timeout (default: 60)
    /// - `GEMINI_TEMPERATURE` - Temperature (default: provider default)
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout,
            temperature,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiGeneratorConfigBuilder {
        GeminiGeneratorConfigBuilder::default()
    }
}

/// Builder for GeminiGeneratorConfig.
#[derive(Debug, Default)]
pub struct GeminiGeneratorConfigBuilder {
    config: GeminiGeneratorConfig,
}

impl GeminiGeneratorConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiGeneratorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiGeneratorConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.temperature.is_none());
    }

    #[test]
    fn test_builder_all_options() {
        let config = GeminiGeneratorConfig::builder()
            .api_key("my-key")
            .api_url("http://localhost:9000")
            .model("gemini-2.5-pro")
            .timeout(Duration::from_secs(5))
            .temperature(0.4)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.temperature, Some(0.4));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_gemini_vars() {
            std::env::remove_var("GEMINI_API_KEY");
            std::env::remove_var("API_KEY");
            std::env::remove_var("GEMINI_API_URL");
            std::env::remove_var("GEMINI_MODEL");
            std::env::remove_var("GEMINI_TIMEOUT_SECS");
            std::env::remove_var("GEMINI_TEMPERATURE");
        }

        // Scenario 1: Missing API key should error
        clear_all_gemini_vars();
        let err = GeminiGeneratorConfig::from_env().unwrap_err();
        match err {
            GenerationError::Configuration(msg) => assert!(msg.contains("GEMINI_API_KEY")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_gemini_vars();
        std::env::set_var("GEMINI_API_KEY", "test-env-key");

        let config = GeminiGeneratorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.temperature.is_none());

        // Scenario 3: Legacy API_KEY fallback
        clear_all_gemini_vars();
        std::env::set_var("API_KEY", "legacy-key");
        let config = GeminiGeneratorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "legacy-key");

        // Scenario 4: All vars set
        clear_all_gemini_vars();
        std::env::set_var("GEMINI_API_KEY", "full-test-key");
        std::env::set_var("GEMINI_API_URL", "https://test.api.com");
        std::env::set_var("GEMINI_MODEL", "gemini-2.0-flash");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "15");
        std::env::set_var("GEMINI_TEMPERATURE", "0.9");

        let config = GeminiGeneratorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.temperature, Some(0.9));

        // Scenario 5: Unparseable numbers fall back to defaults
        clear_all_gemini_vars();
        std::env::set_var("GEMINI_API_KEY", "k");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "soon");
        let config = GeminiGeneratorConfig::from_env().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        clear_all_gemini_vars();
    }
}
