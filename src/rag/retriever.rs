//! Semantic retrieval against the verse index

use std::sync::Arc;

use tracing::debug;

use crate::embeddings::Embedder;
use crate::errors::Result;
use crate::index::VerseIndex;
use crate::index::VerseMatch;

/// Retriever combining an embedder with the loaded verse index
pub struct Retriever {
    index: Arc<VerseIndex>,
    embedder: Arc<dyn Embedder>,
}

impl Retriever {
    /// Create a new retriever
    pub fn new(index: Arc<VerseIndex>, embedder: Arc<dyn Embedder>) -> Self {
        Self { index, embedder }
    }

    /// Retrieve the top-k verses most similar to a statement
    ///
    /// No similarity threshold is applied: even an unrelated statement
    /// receives `min(k, index size)` verses, and the instruction template's
    /// irrelevance rule is what handles the low-similarity case.
    pub async fn semantic_search(&self, statement: &str, k: usize) -> Result<Vec<VerseMatch>> {
        debug!("Performing semantic search: {}", statement);

        let query_embedding = self.embedder.embed(statement).await?;
        let matches = self.index.search(&query_embedding, k)?;

        debug!("Retrieved {} verses", matches.len());
        Ok(matches)
    }

    /// Number of indexed verses
    #[must_use]
    pub fn index_len(&self) -> usize {
        self.index.len()
    }
}
