//! Complete fact-checking pipeline: Retrieve -> Assemble -> Generate -> Classify

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::embeddings::Embedder;
use crate::embeddings::EmbeddingService;
use crate::errors::RamaRagError;
use crate::errors::Result;
use crate::index::VerseIndex;
use crate::index::VerseMatch;
use crate::llm::LlmService;
use crate::rag::ContextAssembler;
use crate::rag::PromptTemplate;
use crate::rag::Retriever;
use crate::rag::Verdict;

/// Complete fact-checking service
///
/// Holds all dependencies explicitly (index, embedder, template, LLM client)
/// so they are constructed once at process start and passed by reference into
/// the query path; tests substitute a fake embedder through `from_parts`.
pub struct FactChecker {
    retriever: Retriever,
    context_assembler: ContextAssembler,
    template: PromptTemplate,
    llm_service: LlmService,
    top_k: usize,
}

/// Result of checking a single statement
#[derive(Debug, Clone)]
pub struct CheckResponse {
    pub statement: String,
    pub verdict: Verdict,
    pub sources: Vec<VerseMatch>,
    pub context: String,
}

impl FactChecker {
    /// Create a new fact checker from application config
    ///
    /// Loads the persisted index from disk and constructs the embedding and
    /// LLM clients.
    ///
    /// # Errors
    /// - Index load errors (missing directory, format mismatch)
    /// - Embedding service configuration errors
    /// - LLM service configuration errors (missing API key)
    pub fn new(config: &AppConfig) -> Result<Self> {
        let index = Arc::new(VerseIndex::load(
            config.index_path(),
            config.embedding_model(),
        )?);
        let embedder: Arc<dyn Embedder> = Arc::new(EmbeddingService::new(config)?);
        let llm_service = LlmService::new(config)?;

        let template = match config.template_path() {
            Some(path) => PromptTemplate::from_file(path)?,
            None => PromptTemplate::builtin(),
        };

        Ok(Self::from_parts(
            index,
            embedder,
            template,
            llm_service,
            config.top_k(),
        ))
    }

    /// Create from existing dependencies
    #[must_use]
    pub fn from_parts(
        index: Arc<VerseIndex>,
        embedder: Arc<dyn Embedder>,
        template: PromptTemplate,
        llm_service: LlmService,
        top_k: usize,
    ) -> Self {
        let retriever = Retriever::new(index, embedder);

        Self {
            retriever,
            context_assembler: ContextAssembler::new(),
            template,
            llm_service,
            top_k,
        }
    }

    /// Retrieve the verses most similar to a statement
    ///
    /// # Errors
    /// - `EmptyStatement` for blank input
    /// - Embedding generation and index search errors
    pub async fn retrieve(&self, statement: &str) -> Result<Vec<VerseMatch>> {
        let statement = statement.trim();
        if statement.is_empty() {
            return Err(RamaRagError::EmptyStatement);
        }

        self.retriever.semantic_search(statement, self.top_k).await
    }

    /// Assemble the full prompt for a statement and its retrieved verses
    #[must_use]
    pub fn build_prompt(&self, statement: &str, matches: &[VerseMatch]) -> String {
        let context = self.context_assembler.assemble(matches);
        self.template.render(statement, &context)
    }

    /// Verify a statement end to end
    ///
    /// # Errors
    /// - `EmptyStatement` for blank input
    /// - Retrieval errors (embedding generation, index search)
    /// - LLM generation errors (API failures, unparseable responses)
    pub async fn check(&self, statement: &str) -> Result<CheckResponse> {
        let statement = statement.trim().to_string();
        info!("Checking statement: {}", statement);

        // Step 1: Retrieve the nearest verses
        let sources = self.retrieve(&statement).await?;

        // Step 2: Assemble context and substitute into the template
        debug!("Assembling context from {} verses", sources.len());
        let context = self.context_assembler.assemble(&sources);
        let prompt = self.template.render(&statement, &context);

        // Step 3: Generate and classify the verdict
        debug!("Requesting verdict from {}", self.llm_service.model());
        let answer = self.llm_service.generate(&prompt).await?;
        let verdict = Verdict::from_response(answer);

        info!("Verdict: {:?}", verdict.kind);

        Ok(CheckResponse {
            statement,
            verdict,
            sources,
            context,
        })
    }

    /// Number of indexed verses available for retrieval
    #[must_use]
    pub fn index_len(&self) -> usize {
        self.retriever.index_len()
    }
}
