//! Integration tests for index persistence and deterministic retrieval

use ramarag::dataset::VerseRecord;
use ramarag::index::IndexEntry;
use ramarag::index::VerseIndex;
use ramarag::index::ENTRIES_FILE;
use ramarag::index::MANIFEST_FILE;

fn entry(kanda: &str, chapter: &str, verse: &str, translation: &str, embedding: Vec<f32>) -> IndexEntry {
    IndexEntry {
        record: VerseRecord {
            kanda: kanda.to_string(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
            translation: translation.to_string(),
        },
        embedding,
    }
}

fn corpus() -> Vec<IndexEntry> {
    vec![
        entry("KishkindaKanda", "4", "8", "this one is his eldest son", vec![0.9, 0.1, 0.0]),
        entry("SundaraKanda", "1", "3", "Hanuman leapt across the ocean", vec![0.0, 0.9, 0.1]),
        entry("BalaKanda", "1", "9", "Narada narrates to Valmiki", vec![0.1, 0.0, 0.9]),
        entry("YuddhaKanda", "50", "12", "the army of monkeys assaulted", vec![0.5, 0.5, 0.0]),
        entry("AyodhyaKanda", "40", "6", "the chariot moved out of the city", vec![0.4, 0.0, 0.6]),
    ]
}

#[test]
fn test_persisted_index_layout() {
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("ramayana_index");

    let index = VerseIndex::build("test-model", 3, corpus()).unwrap();
    index.save(&index_dir).unwrap();

    assert!(index_dir.join(MANIFEST_FILE).exists());
    assert!(index_dir.join(ENTRIES_FILE).exists());
}

#[test]
fn test_rebuild_overwrites_existing_index() {
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("ramayana_index");

    let full = VerseIndex::build("test-model", 3, corpus()).unwrap();
    full.save(&index_dir).unwrap();

    let smaller = VerseIndex::build("test-model", 3, corpus().into_iter().take(2).collect()).unwrap();
    smaller.save(&index_dir).unwrap();

    let loaded = VerseIndex::load(&index_dir, "test-model").unwrap();
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_reload_preserves_search_results() {
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("ramayana_index");

    let index = VerseIndex::build("test-model", 3, corpus()).unwrap();
    let before = index.search(&[1.0, 0.0, 0.0], 4).unwrap();
    index.save(&index_dir).unwrap();

    let reloaded = VerseIndex::load(&index_dir, "test-model").unwrap();
    let after = reloaded.search(&[1.0, 0.0, 0.0], 4).unwrap();

    assert_eq!(before.len(), 4);
    let keys = |matches: &[ramarag::index::VerseMatch]| {
        matches
            .iter()
            .map(|m| (m.record.kanda.clone(), m.record.verse.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(keys(&before), keys(&after));
}

#[test]
fn test_model_mismatch_still_loads() {
    // A differing model only degrades quality; loading must not fail
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("ramayana_index");

    let index = VerseIndex::build("model-a", 3, corpus()).unwrap();
    index.save(&index_dir).unwrap();

    let loaded = VerseIndex::load(&index_dir, "model-b").unwrap();
    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded.manifest().embedding_model, "model-a");
}
