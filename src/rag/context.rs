//! Context assembly from retrieved verses

use crate::index::VerseMatch;

/// Assembler for creating an LLM context block from retrieved verses
///
/// Every retrieved verse is included in retrieval order; there is no length
/// cap or deduplication, since the retrieval count is already fixed at a
/// small k.
#[derive(Debug, Default)]
pub struct ContextAssembler;

impl ContextAssembler {
    /// Create a new context assembler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Assemble the context block from verse matches
    ///
    /// Each match contributes its metadata line and translation line:
    ///
    /// ```text
    /// Kanda/Book: <kanda>, Chapter: <chapter>, Verse: <verse>
    /// Translation: <translation>
    /// ```
    #[must_use]
    pub fn assemble(&self, matches: &[VerseMatch]) -> String {
        let mut context = String::new();

        for m in matches {
            context.push_str(&format!(
                "Kanda/Book: {}, Chapter: {}, Verse: {}\n",
                m.record.kanda, m.record.chapter, m.record.verse
            ));
            context.push_str(&format!("Translation: {}\n\n", m.record.translation));
        }

        context
    }

    /// Create a short human-readable summary of the retrieved verses
    #[must_use]
    pub fn create_summary(&self, matches: &[VerseMatch]) -> String {
        if matches.is_empty() {
            return "No verses retrieved.".to_string();
        }

        let mut summary = format!("Retrieved {} verse(s):\n", matches.len());
        for (idx, m) in matches.iter().enumerate() {
            let preview = crate::cli::output::truncate_str(&m.record.translation, 80);
            summary.push_str(&format!(
                "  {}. {} {}.{} | Score: {:.3} | {}\n",
                idx + 1,
                m.record.kanda,
                m.record.chapter,
                m.record.verse,
                m.score,
                preview
            ));
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::VerseRecord;

    fn verse_match(kanda: &str, chapter: &str, verse: &str, translation: &str) -> VerseMatch {
        VerseMatch {
            record: VerseRecord {
                kanda: kanda.to_string(),
                chapter: chapter.to_string(),
                verse: verse.to_string(),
                translation: translation.to_string(),
            },
            score: 0.9,
        }
    }

    #[test]
    fn test_assemble_format_and_order() {
        let matches = vec![
            verse_match("KishkindaKanda", "4", "8", "this one is his eldest son"),
            verse_match("AranyaKanda", "17", "15", "I am his eldest son"),
        ];

        let context = ContextAssembler::new().assemble(&matches);

        assert!(context.contains("Kanda/Book: KishkindaKanda, Chapter: 4, Verse: 8"));
        assert!(context.contains("Translation: this one is his eldest son"));
        assert!(context.contains("Kanda/Book: AranyaKanda, Chapter: 17, Verse: 15"));

        // Retrieval order is preserved
        let first = context.find("KishkindaKanda").unwrap();
        let second = context.find("AranyaKanda").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_assemble_each_verse_exactly_once() {
        let matches = vec![verse_match("BalaKanda", "1", "1", "unique translation text")];
        let context = ContextAssembler::new().assemble(&matches);
        assert_eq!(context.matches("unique translation text").count(), 1);
        assert_eq!(
            context
                .matches("Kanda/Book: BalaKanda, Chapter: 1, Verse: 1")
                .count(),
            1
        );
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(ContextAssembler::new().assemble(&[]), "");
    }

    #[test]
    fn test_create_summary_lists_every_match() {
        let matches = vec![
            verse_match("KishkindaKanda", "4", "8", "this one is his eldest son"),
            verse_match("SundaraKanda", "1", "3", "Hanuman leapt across the ocean"),
        ];

        let summary = ContextAssembler::new().create_summary(&matches);

        assert!(summary.starts_with("Retrieved 2 verse(s):"));
        assert!(summary.contains("1. KishkindaKanda 4.8"));
        assert!(summary.contains("2. SundaraKanda 1.3"));
        assert!(summary.contains("this one is his eldest son"));
        assert!(summary.contains("Score: 0.900"));
    }

    #[test]
    fn test_create_summary_empty() {
        assert_eq!(
            ContextAssembler::new().create_summary(&[]),
            "No verses retrieved."
        );
    }
}
