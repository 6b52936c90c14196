//! Embedding generation service with text normalization and batching

use std::sync::Arc;

use tracing::debug;

use super::client::EmbeddingClient;
use super::Embedder;
use super::EmbeddingConfig;
use super::MAX_BATCH_SIZE;
use crate::errors::Result;

/// Service for generating embeddings through the configured provider
pub struct EmbeddingService {
    client: Arc<EmbeddingClient>,
    config: EmbeddingConfig,
}

impl EmbeddingService {
    /// Create a new embedding service from application config
    pub fn new(config: &crate::config::AppConfig) -> Result<Self> {
        Self::from_config(EmbeddingConfig::from_app_config(config))
    }

    /// Create from custom config
    pub fn from_config(config: EmbeddingConfig) -> Result<Self> {
        let client = EmbeddingClient::new(
            config.provider,
            config.model.clone(),
            config.endpoint.clone(),
            config.api_key.clone(),
        )?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Normalize text before embedding
    ///
    /// Embedding APIs behave better without embedded newlines; the verse
    /// translations occasionally carry them.
    fn normalize(text: &str) -> String {
        text.replace(['\n', '\r'], " ").trim().to_string()
    }
}

#[async_trait::async_trait]
impl Embedder for EmbeddingService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.client.generate(&Self::normalize(text)).await
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let normalized: Vec<String> = texts.iter().map(|t| Self::normalize(t)).collect();

        let mut embeddings = Vec::with_capacity(normalized.len());
        for chunk in normalized.chunks(MAX_BATCH_SIZE) {
            debug!("Embedding batch of {} texts", chunk.len());
            let batch = self
                .client
                .generate_batch(chunk.iter().map(String::as_str).collect())
                .await?;
            embeddings.extend(batch);
        }

        Ok(embeddings)
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
