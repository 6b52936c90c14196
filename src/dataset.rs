//! Dataset loading for the Ramayana verse corpus
//!
//! The source dataset is a CSV file of verse translations with structural
//! metadata. The file is Latin-1 (ISO-8859-1) encoded, so bytes are decoded
//! before CSV parsing. Required columns are validated up front and reported
//! as typed errors instead of panicking mid-parse.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::info;

use crate::errors::RamaRagError;
use crate::errors::Result;

/// Required dataset columns
pub const TRANSLATION_COLUMN: &str = "English Translation";
pub const KANDA_COLUMN: &str = "Kanda/Book";
pub const CHAPTER_COLUMN: &str = "Sarga/Chapter";
pub const VERSE_COLUMN: &str = "Shloka/Verse";

/// A single verse translation with its structural metadata
///
/// Chapter and verse are kept as strings: the dataset is not guaranteed to
/// hold clean integers, and missing values are coerced to their string
/// representation rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub kanda: String,
    pub chapter: String,
    pub verse: String,
    pub translation: String,
}

/// Load all verse records from a Latin-1 encoded CSV dataset
///
/// # Errors
/// - IO errors reading the file
/// - CSV parsing errors (malformed rows, header read failures)
/// - `MissingColumn` if any required column is absent from the header
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<VerseRecord>> {
    let bytes = std::fs::read(&path)?;
    let text = encoding_rs::mem::decode_latin1(&bytes);

    let records = parse_dataset(&text)?;
    info!(
        "Loaded {} verse records from {}",
        records.len(),
        path.as_ref().display()
    );

    Ok(records)
}

/// Parse verse records from already-decoded CSV text
pub fn parse_dataset(text: &str) -> Result<Vec<VerseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let translation_idx = column_index(&headers, TRANSLATION_COLUMN)?;
    let kanda_idx = column_index(&headers, KANDA_COLUMN)?;
    let chapter_idx = column_index(&headers, CHAPTER_COLUMN)?;
    let verse_idx = column_index(&headers, VERSE_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // Missing cells coerce to empty strings, mirroring the dataset's
        // loose handling of absent translations
        records.push(VerseRecord {
            kanda: row.get(kanda_idx).unwrap_or_default().to_string(),
            chapter: row.get(chapter_idx).unwrap_or_default().to_string(),
            verse: row.get(verse_idx).unwrap_or_default().to_string(),
            translation: row.get(translation_idx).unwrap_or_default().to_string(),
        });
    }

    Ok(records)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| RamaRagError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Kanda/Book,Sarga/Chapter,Shloka/Verse,English Translation
KishkindaKanda,4,8,\"this one is his eldest son, and he is renowned among people by the name of Rama\"
AranyaKanda,17,15,\"I am his eldest son, and people hear of me by name Rama.\"
BalaKanda,1,1,
";

    #[test]
    fn test_parse_dataset() {
        let records = parse_dataset(SAMPLE_CSV).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kanda, "KishkindaKanda");
        assert_eq!(records[0].chapter, "4");
        assert_eq!(records[0].verse, "8");
        assert!(records[0].translation.contains("eldest son"));
    }

    #[test]
    fn test_empty_translation_kept() {
        let records = parse_dataset(SAMPLE_CSV).unwrap();
        assert_eq!(records[2].kanda, "BalaKanda");
        assert_eq!(records[2].translation, "");
    }

    #[test]
    fn test_missing_column_is_typed_error() {
        let csv = "Kanda/Book,Sarga/Chapter,Shloka/Verse\nBalaKanda,1,1\n";
        let err = parse_dataset(csv).unwrap_err();
        match err {
            RamaRagError::MissingColumn(name) => assert_eq!(name, TRANSLATION_COLUMN),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_latin1_decoding() {
        // 0xE9 is "é" in Latin-1 and invalid UTF-8 on its own
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Kanda/Book,Sarga/Chapter,Shloka/Verse,English Translation\n");
        bytes.extend_from_slice(b"BalaKanda,1,1,d\xE9va\n");

        let text = encoding_rs::mem::decode_latin1(&bytes);
        let records = parse_dataset(&text).unwrap();
        assert_eq!(records[0].translation, "d\u{e9}va");
    }
}
