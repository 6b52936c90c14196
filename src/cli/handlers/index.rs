//! Index building handler

use tracing::info;

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::config::AppConfig;
use crate::dataset::load_dataset;
use crate::embeddings::Embedder;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;
use crate::index::IndexEntry;
use crate::index::VerseIndex;

/// Build the verse index from a dataset CSV and persist it to disk
///
/// This is a full rebuild: any existing index at the output path is
/// overwritten.
pub async fn handle_index(
    config: &AppConfig,
    dataset_path: &str,
    output: Option<String>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.index_path().to_string());

    print_info(&format!("📖 Loading dataset from {dataset_path}"));
    let records = load_dataset(dataset_path)?;
    print_info(&format!("   {} verse records loaded", records.len()));

    let embedder = EmbeddingService::new(config)?;
    print_info(&format!(
        "🧮 Computing embeddings with {} ({} dimensions)",
        embedder.model(),
        embedder.dimension()
    ));

    let translations: Vec<String> = records.iter().map(|r| r.translation.clone()).collect();
    let embeddings = embedder.embed_batch(&translations).await?;
    info!("Computed {} embeddings", embeddings.len());

    let entries: Vec<IndexEntry> = records
        .into_iter()
        .zip(embeddings)
        .map(|(record, embedding)| IndexEntry { record, embedding })
        .collect();

    let index = VerseIndex::build(embedder.model(), embedder.dimension(), entries)?;
    index.save(&output)?;

    print_success(&format!(
        "✅ Vector index with {} verses saved to '{output}/'",
        index.len()
    ));

    Ok(())
}
