pub mod cli;
pub mod config;
pub mod dataset;
pub mod embeddings;
pub mod errors;
pub mod index;
pub mod llm;
pub mod logging;
pub mod rag;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
