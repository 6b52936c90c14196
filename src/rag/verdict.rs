//! Verdict classification from LLM responses
//!
//! The LLM returns free-form text that is expected, but not guaranteed, to
//! begin with one of three leading symbols. Only the leading symbol is
//! inspected; no verse citations are parsed out of the response.

use serde::Deserialize;
use serde::Serialize;

/// Classification derived from a verdict's leading symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictKind {
    /// Response begins with ✅: the context supports the statement
    Supported,
    /// Response begins with ❌: the context contradicts the statement
    Contradicted,
    /// Response begins with ⚠️: the context is irrelevant or insufficient
    Unverifiable,
    /// Anything else, including malformed responses
    Unclassified,
}

impl VerdictKind {
    /// Classify a response by its leading symbol, ignoring leading whitespace
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim_start();
        if trimmed.starts_with('✅') {
            Self::Supported
        } else if trimmed.starts_with('❌') {
            Self::Contradicted
        } else if trimmed.starts_with('⚠') {
            Self::Unverifiable
        } else {
            Self::Unclassified
        }
    }
}

/// An LLM verdict with its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub text: String,
    pub kind: VerdictKind,
}

impl Verdict {
    /// Wrap and classify an LLM response
    #[must_use]
    pub fn from_response(text: String) -> Self {
        let kind = VerdictKind::classify(&text);
        Self { text, kind }
    }
}
