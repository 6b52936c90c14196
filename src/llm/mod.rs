//! LLM chat-completion client
//!
//! One synchronous request per verdict: no retry, no streaming. The endpoint
//! is any OpenAI-compatible `/chat/completions` API (Groq by default), with
//! the model identifier fixed in configuration.

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::RamaRagError;
use crate::errors::Result;

/// Default sampling temperature for fact-check verdicts
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
/// Default response token budget
pub const DEFAULT_MAX_TOKENS: usize = 1024;

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Client for OpenAI-compatible chat-completion APIs
pub struct LlmService {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl LlmService {
    /// Create a new LLM service from application config
    ///
    /// # Errors
    /// - `ConfigError` if no API key is available (config or `GROQ_API_KEY`)
    /// - HTTP client build errors
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api_key = config.llm_key();
        if api_key.is_empty() {
            return Err(RamaRagError::ConfigError(
                "LLM API key not provided. Set llm_key in config.toml or the GROQ_API_KEY \
                 environment variable"
                    .to_string(),
            ));
        }

        Self::from_parts(
            config.llm_endpoint().to_string(),
            api_key,
            config.llm_model().to_string(),
        )
    }

    /// Create from explicit endpoint, key and model
    pub fn from_parts(endpoint: String, api_key: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| RamaRagError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model,
        })
    }

    /// Generate a completion for a single user prompt
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_params(prompt, DEFAULT_TEMPERATURE, DEFAULT_MAX_TOKENS)
            .await
    }

    /// Generate a completion with explicit sampling parameters
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts, authentication failures)
    /// - Non-success status codes and unparseable or empty responses
    pub async fn generate_with_params(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage>,
            temperature: f32,
            max_tokens: usize,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: ResponseMessage,
        }

        #[derive(Deserialize)]
        struct ResponseMessage {
            content: String,
        }

        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Calling chat completions API: {} (model: {})", url, self.model);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RamaRagError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RamaRagError::LlmError(format!(
                "LLM API error ({status}): {error_text}"
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| RamaRagError::LlmError(format!("Failed to parse response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| RamaRagError::LlmError("No choices in response".to_string()))
    }

    /// Model identifier this service calls
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let mut config = AppConfig::default();
        config.llm.llm_key = String::new();
        // Only meaningful when GROQ_API_KEY is not set in the environment
        if std::env::var("GROQ_API_KEY").is_err() {
            assert!(matches!(
                LlmService::new(&config),
                Err(RamaRagError::ConfigError(_))
            ));
        }
    }

    #[tokio::test]
    #[ignore = "Requires GROQ_API_KEY and network access"]
    async fn test_generate() {
        let config = AppConfig::default();
        let llm = LlmService::new(&config).unwrap();
        let answer = llm.generate("Say OK and nothing else.").await.unwrap();
        assert!(!answer.is_empty());
    }
}
