//! On-disk verse index with exhaustive cosine-similarity search
//!
//! The index is a directory holding a manifest (format version, embedding
//! model, dimension, entry count) and the entries themselves. The corpus is
//! small enough (a few tens of thousands of verses) that a brute-force scan
//! is both fast and fully deterministic: ties are broken by insertion order.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::info;
use tracing::warn;

use crate::dataset::VerseRecord;
use crate::errors::RamaRagError;
use crate::errors::Result;

/// Manifest file name inside the index directory
pub const MANIFEST_FILE: &str = "manifest.json";
/// Entries file name inside the index directory
pub const ENTRIES_FILE: &str = "entries.json";
/// On-disk format version
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Index metadata persisted alongside the entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    pub format_version: u32,
    pub embedding_model: String,
    pub dimension: usize,
    pub entry_count: usize,
}

/// A verse record together with its embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub record: VerseRecord,
    pub embedding: Vec<f32>,
}

/// A retrieved verse with its similarity score
#[derive(Debug, Clone)]
pub struct VerseMatch {
    pub record: VerseRecord,
    pub score: f32,
}

/// Read-only searchable index over embedded verse translations
#[derive(Debug)]
pub struct VerseIndex {
    manifest: IndexManifest,
    entries: Vec<IndexEntry>,
}

impl VerseIndex {
    /// Build an index from embedded entries
    ///
    /// # Errors
    /// - `DimensionMismatch` if any entry's embedding has the wrong dimension
    /// - `IndexError` if any embedding contains non-finite values
    pub fn build(model: &str, dimension: usize, entries: Vec<IndexEntry>) -> Result<Self> {
        for (idx, entry) in entries.iter().enumerate() {
            if entry.embedding.len() != dimension {
                return Err(RamaRagError::DimensionMismatch {
                    expected: dimension,
                    actual: entry.embedding.len(),
                });
            }
            if entry.embedding.iter().any(|v| !v.is_finite()) {
                return Err(RamaRagError::IndexError(format!(
                    "Entry {idx} contains non-finite embedding values"
                )));
            }
        }

        let manifest = IndexManifest {
            format_version: INDEX_FORMAT_VERSION,
            embedding_model: model.to_string(),
            dimension,
            entry_count: entries.len(),
        };

        Ok(Self { manifest, entries })
    }

    /// Persist the index to a directory, overwriting any previous index
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        std::fs::write(
            dir.join(MANIFEST_FILE),
            serde_json::to_string_pretty(&self.manifest)?,
        )?;
        std::fs::write(dir.join(ENTRIES_FILE), serde_json::to_string(&self.entries)?)?;

        info!(
            "Saved index with {} entries to {}",
            self.entries.len(),
            dir.display()
        );

        Ok(())
    }

    /// Load a persisted index from a directory
    ///
    /// Warns (without aborting) when the index was built with a different
    /// embedding model than the one configured, since mixed models silently
    /// degrade retrieval quality.
    pub fn load<P: AsRef<Path>>(dir: P, expected_model: &str) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.join(MANIFEST_FILE).exists() {
            return Err(RamaRagError::IndexError(format!(
                "No index found at {}. Run `ramarag index` first",
                dir.display()
            )));
        }

        let manifest: IndexManifest =
            serde_json::from_str(&std::fs::read_to_string(dir.join(MANIFEST_FILE))?)?;

        if manifest.format_version != INDEX_FORMAT_VERSION {
            return Err(RamaRagError::IndexError(format!(
                "Unsupported index format version {} (expected {})",
                manifest.format_version, INDEX_FORMAT_VERSION
            )));
        }

        if manifest.embedding_model != expected_model {
            warn!(
                "Index was built with embedding model '{}' but '{}' is configured; \
                 retrieval quality will degrade",
                manifest.embedding_model, expected_model
            );
        }

        let entries: Vec<IndexEntry> =
            serde_json::from_str(&std::fs::read_to_string(dir.join(ENTRIES_FILE))?)?;

        if entries.len() != manifest.entry_count {
            return Err(RamaRagError::IndexError(format!(
                "Entry count mismatch: manifest says {}, found {}",
                manifest.entry_count,
                entries.len()
            )));
        }

        info!("Loaded index with {} entries from {}", entries.len(), dir.display());

        Ok(Self { manifest, entries })
    }

    /// Number of indexed verses
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index manifest
    #[must_use]
    pub const fn manifest(&self) -> &IndexManifest {
        &self.manifest
    }

    /// Retrieve the top-k most similar verses to a query vector
    ///
    /// Always returns exactly `min(k, len)` matches; no similarity threshold
    /// is applied, so low-scoring matches are included by design.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the query vector has the wrong dimension
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<VerseMatch>> {
        if query.len() != self.manifest.dimension {
            return Err(RamaRagError::DimensionMismatch {
                expected: self.manifest.dimension,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx, cosine_similarity(query, &entry.embedding)))
            .collect();

        // Score descending, insertion order as deterministic tie-break
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(idx, score)| VerseMatch {
                record: self.entries[idx].record.clone(),
                score,
            })
            .collect())
    }
}

/// Cosine similarity between two equal-length vectors
///
/// Zero vectors score 0.0 rather than NaN.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
