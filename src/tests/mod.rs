//! Cross-module tests and shared test fixtures


use crate::dataset::VerseRecord;
use crate::embeddings::Embedder;
use crate::errors::Result;
use crate::index::IndexEntry;
use crate::index::VerseIndex;

/// Dimension used by the fake embedder
pub const FAKE_DIM: usize = 32;

/// Deterministic bag-of-words embedder for tests
///
/// Tokens are lowercased, hashed with FNV-1a into a fixed number of buckets
/// and the resulting vector is L2-normalized. Texts sharing vocabulary get
/// high cosine similarity, so retrieval behaves sensibly without a network.
pub struct FakeEmbedder;

impl FakeEmbedder {
    #[must_use]
    pub fn embed_text(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; FAKE_DIM];
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            vector[fnv1a(token) as usize % FAKE_DIM] += 1.0;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

/// FNV-1a, stable across platforms and releases
fn fnv1a(token: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in token.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[async_trait::async_trait]
impl Embedder for FakeEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(Self::embed_text(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| Self::embed_text(t)).collect())
    }

    fn dimension(&self) -> usize {
        FAKE_DIM
    }

    fn model(&self) -> &str {
        "fake-embedder"
    }
}

/// Sample verse corpus containing the KishkindaKanda 4.8 record
#[must_use]
pub fn sample_records() -> Vec<VerseRecord> {
    let rows = [
        (
            "KishkindaKanda",
            "4",
            "8",
            "this one is his eldest son, and he is renowned among people by the name of Rama, \
             son of King Dasharatha",
        ),
        (
            "AranyaKanda",
            "17",
            "15",
            "I am his eldest son, and people hear of me by name Rama.",
        ),
        (
            "SundaraKanda",
            "1",
            "3",
            "Hanuman leapt across the ocean towards Lanka in search of Seetha.",
        ),
        (
            "BalaKanda",
            "1",
            "9",
            "Narada narrates the virtues of a man of principles to sage Valmiki.",
        ),
        (
            "YuddhaKanda",
            "50",
            "12",
            "the army of monkeys assaulted the ramparts of the city.",
        ),
        (
            "AyodhyaKanda",
            "40",
            "6",
            "the chariot moved slowly out of the city while the citizens wept.",
        ),
    ];

    rows.iter()
        .map(|(kanda, chapter, verse, translation)| VerseRecord {
            kanda: (*kanda).to_string(),
            chapter: (*chapter).to_string(),
            verse: (*verse).to_string(),
            translation: (*translation).to_string(),
        })
        .collect()
}

/// Build an in-memory index over the sample corpus with the fake embedder
#[must_use]
pub fn sample_index() -> VerseIndex {
    let entries: Vec<IndexEntry> = sample_records()
        .into_iter()
        .map(|record| {
            let embedding = FakeEmbedder::embed_text(&record.translation);
            IndexEntry { record, embedding }
        })
        .collect();

    VerseIndex::build("fake-embedder", FAKE_DIM, entries).expect("sample index builds")
}
