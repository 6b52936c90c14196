//! Embeddings generation module
//!
//! Embedding computation is delegated to an external provider:
//! - OpenAI-compatible `/embeddings` endpoints (OpenAI, TEI, ...)
//! - Ollama local `/api/embeddings` endpoints
//!
//! The same model name must be used at index-build time and query time;
//! a mismatch silently degrades retrieval quality, so the index manifest
//! records the model it was built with and loading warns on a difference.

pub mod client;
pub mod generator;

pub use client::EmbeddingClient;
pub use client::EmbeddingProvider;
pub use generator::EmbeddingService;

use crate::errors::Result;

/// Default embedding dimension for sentence-transformers/all-MiniLM-L6-v2
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Maximum batch size for embedding generation
pub const MAX_BATCH_SIZE: usize = 100;

/// Seam for embedding computation
///
/// `EmbeddingService` is the production implementation; tests substitute a
/// deterministic fake so no network is involved.
#[async_trait::async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, preserving input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embedding dimension produced by this embedder
    fn dimension(&self) -> usize;

    /// Model identifier, recorded in the index manifest
    fn model(&self) -> &str;
}

/// Configuration for embedding generation
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub dimension: usize,
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl EmbeddingConfig {
    pub fn from_app_config(config: &crate::config::AppConfig) -> Self {
        // Infer the provider from the endpoint: anything that is not an
        // OpenAI-style API is assumed to be Ollama
        let endpoint = config.embedding_endpoint();
        let provider = if endpoint.contains("api.openai.com")
            || endpoint.contains("/openai")
            || config.embedding_api_key().is_some()
        {
            EmbeddingProvider::OpenAI
        } else {
            EmbeddingProvider::Ollama
        };

        Self {
            provider,
            model: config.embedding_model().to_string(),
            dimension: config.embedding_dimension(),
            endpoint: endpoint.to_string(),
            api_key: config.embedding_api_key().map(str::to_string),
        }
    }
}
