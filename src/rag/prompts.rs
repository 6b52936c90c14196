//! Prompt template loading and substitution
//!
//! The instruction template is a versioned text asset, not inline logic: the
//! built-in one is embedded from `templates/fact_check.txt` and can be
//! overridden with a file path in configuration. Rendering is pure
//! placeholder substitution, independent of template content.

use std::path::Path;

use crate::errors::RamaRagError;
use crate::errors::Result;

/// Placeholder for the statement under verification
pub const STATEMENT_PLACEHOLDER: &str = "{statement}";
/// Placeholder for the assembled verse context
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

/// Built-in fact-checking instruction template
const BUILTIN_TEMPLATE: &str = include_str!("../../templates/fact_check.txt");

/// A prompt template with named placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template, validating that both placeholders are present
    pub fn new(template: String) -> Result<Self> {
        for placeholder in [STATEMENT_PLACEHOLDER, CONTEXT_PLACEHOLDER] {
            if !template.contains(placeholder) {
                return Err(RamaRagError::ConfigError(format!(
                    "Prompt template is missing the {placeholder} placeholder"
                )));
            }
        }

        Ok(Self { template })
    }

    /// The built-in fact-checking template
    pub fn builtin() -> Self {
        // The embedded asset is validated by tests, so this cannot fail
        Self {
            template: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Load a template override from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(std::fs::read_to_string(path)?)
    }

    /// Substitute the statement and context into the template
    #[must_use]
    pub fn render(&self, statement: &str, context: &str) -> String {
        self.template
            .replace(STATEMENT_PLACEHOLDER, statement)
            .replace(CONTEXT_PLACEHOLDER, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_template_has_each_placeholder_once() {
        assert_eq!(BUILTIN_TEMPLATE.matches(STATEMENT_PLACEHOLDER).count(), 1);
        assert_eq!(BUILTIN_TEMPLATE.matches(CONTEXT_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_substitutes_exactly_once() {
        let template =
            PromptTemplate::new("STATEMENT: {statement}\nCONTEXT:\n{context}".to_string()).unwrap();
        let prompt = template.render("Rama is the eldest son.", "some context block");

        assert_eq!(prompt.matches("Rama is the eldest son.").count(), 1);
        assert_eq!(prompt.matches("some context block").count(), 1);
        assert!(!prompt.contains(STATEMENT_PLACEHOLDER));
        assert!(!prompt.contains(CONTEXT_PLACEHOLDER));
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let err = PromptTemplate::new("no placeholders here".to_string()).unwrap_err();
        assert!(matches!(err, RamaRagError::ConfigError(_)));
    }

    #[test]
    fn test_builtin_template_keeps_classification_rules() {
        let template = PromptTemplate::builtin();
        let prompt = template.render("s", "c");
        assert!(prompt.contains("✅ True"));
        assert!(prompt.contains("❌ False"));
        assert!(prompt.contains("⚠️ Irrelevant"));
    }
}
