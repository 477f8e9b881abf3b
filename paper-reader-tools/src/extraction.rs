//! PDF text extraction.
//!
//! Tools only see the [`TextExtractor`] trait; the default implementation is
//! backed by `lopdf`.

use crate::error::ToolError;
use lopdf::Document;
use tracing::{debug, warn};

/// Plain text pulled out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub pages: usize,
}

pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<ExtractedText, ToolError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<ExtractedText, ToolError> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| ToolError::ExtractionFailed(format!("Failed to load PDF: {}", e)))?;

        // get_pages is keyed by page number, so iteration is already in order
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut text = String::new();

        for page_num in &page_numbers {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    let page_text = page_text.trim_end();
                    if page_text.is_empty() {
                        continue;
                    }
                    if !text.is_empty() {
                        text.push('\n');
                    }
                    text.push_str(page_text);
                }
                Err(e) => warn!(page = page_num, "Skipping unreadable page: {}", e),
            }
        }

        debug!(pages = page_numbers.len(), bytes = text.len(), "Extracted PDF text");

        Ok(ExtractedText {
            text,
            pages: page_numbers.len(),
        })
    }
}
