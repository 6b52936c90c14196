//! Configuration display handler

use crate::config::AppConfig;
use crate::errors::Result;

/// Print the effective configuration
pub fn handle_config(config: &AppConfig) -> Result<()> {
    println!("Current configuration:");
    println!("  Logging level:       {}", config.logging.level);
    println!("  Embedding endpoint:  {}", config.embedding_endpoint());
    println!("  Embedding model:     {}", config.embedding_model());
    println!("  Embedding dimension: {}", config.embedding_dimension());
    println!("  LLM endpoint:        {}", config.llm_endpoint());
    println!("  LLM model:           {}", config.llm_model());
    println!(
        "  LLM key:             {}",
        if config.llm_key().is_empty() {
            "(not set)"
        } else {
            "(configured)"
        }
    );
    println!("  Index path:          {}", config.index_path());
    println!("  Retrieval top-k:     {}", config.top_k());
    println!(
        "  Prompt template:     {}",
        config.template_path().unwrap_or("(built-in)")
    );

    Ok(())
}
