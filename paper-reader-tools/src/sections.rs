//! Section heuristics over extracted text.
//!
//! This is a best-effort scan, not a structural parse: atypical layouts can
//! produce false positives or misses.

use crate::error::ToolError;
use regex::Regex;

pub const ABSTRACT_NOT_FOUND_TEXT: &str = "Abstract not found";

// Lazy body capture stops at the first "introduction" or "1." after the
// heading. Separators right after the heading (": ", ". ", dashes) are skipped.
const ABSTRACT_PATTERN: &str = r"(?is)abstract[\s:.\-–—]*(.*?)(?:introduction|1\.)";

#[derive(Debug, Clone)]
pub struct AbstractLocator {
    pattern: Regex,
}

impl AbstractLocator {
    pub fn new() -> Result<Self, ToolError> {
        let pattern = Regex::new(ABSTRACT_PATTERN)
            .map_err(|e| ToolError::ValidationError(format!("Invalid abstract pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// The trimmed abstract body, or `None` when no abstract span exists.
    ///
    /// An abstract heading directly followed by its terminator yields
    /// `Some("")`, which is distinct from not finding one.
    pub fn locate(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|body| body.as_str().trim().to_string())
    }
}
