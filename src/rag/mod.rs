//! RAG (Retrieval-Augmented Generation) module
//!
//! End-to-end fact checking against the indexed verse corpus:
//! - Semantic retrieval of the nearest verse translations
//! - Context assembly with structural metadata
//! - Prompt template substitution
//! - LLM verdict generation and classification
//!
//! # Examples
//!
//! ```rust,no_run
//! use ramarag::config::AppConfig;
//! use ramarag::rag::FactChecker;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let checker = FactChecker::new(&config)?;
//!
//!     let response = checker
//!         .check("Rama is the eldest son of King Dasharatha.")
//!         .await?;
//!     println!("{}", response.verdict.text);
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod pipeline;
pub mod prompts;
pub mod retriever;
pub mod verdict;

pub use context::ContextAssembler;
pub use pipeline::CheckResponse;
pub use pipeline::FactChecker;
pub use prompts::PromptTemplate;
pub use retriever::Retriever;
pub use verdict::Verdict;
pub use verdict::VerdictKind;

pub use crate::index::VerseMatch;
