//! CLI output formatting utilities
//!
//! This module provides consistent, styled output for the `ramarag` CLI.
//! Verdicts are rendered as colored panels keyed on their classification.

use crate::index::VerseMatch;
use crate::rag::Verdict;
use crate::rag::VerdictKind;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8
/// characters.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print a success message (green)
pub fn print_success(message: &str) {
    println!("{GREEN}{message}{RESET}");
}

/// Print an error message (red)
pub fn print_error(message: &str) {
    println!("{RED}{message}{RESET}");
}

/// Print a warning message (yellow)
pub fn print_warning(message: &str) {
    println!("{YELLOW}{message}{RESET}");
}

/// Print an informational message (cyan)
pub fn print_info(message: &str) {
    println!("{CYAN}{message}{RESET}");
}

/// Print a verdict panel styled by its classification
pub fn print_verdict(verdict: &Verdict) {
    println!("\n{}", "═".repeat(80));
    println!("🧾 Result\n");
    match verdict.kind {
        VerdictKind::Supported => print_success(verdict.text.trim()),
        VerdictKind::Contradicted => print_error(verdict.text.trim()),
        VerdictKind::Unverifiable => print_warning(verdict.text.trim()),
        VerdictKind::Unclassified => print_info(verdict.text.trim()),
    }
    println!("{}", "═".repeat(80));
}

/// Print the retrieved verses backing a verdict
pub fn print_sources(matches: &[VerseMatch]) {
    let summary = crate::rag::ContextAssembler::new().create_summary(matches);
    println!("\n📚 {summary}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_multibyte_safe() {
        assert_eq!(truncate_str("✅✅✅✅", 2), "✅✅...");
        assert_eq!(truncate_str("short", 10), "short");
    }
}
