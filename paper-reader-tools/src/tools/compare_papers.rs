use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};
use crate::dispatcher::INTERNAL_ERROR_TEXT;
use crate::documents::{DocumentLoader, Lookup, Paper, FILE_NOT_FOUND_TEXT};
use crate::error::ToolError;
use crate::execution_context::ExecutionContext;
use crate::limits::{truncate_chars, TextLimits};
use crate::sections::AbstractLocator;
use crate::tools::base::{Tool, ToolResponse};

pub const TOO_FEW_PAPERS_TEXT: &str = "At least two paths are required to compare papers.";

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Deserialize)]
struct ComparePapersInput {
    paths: Vec<String>,
}

/// Summarises several papers side by side.
///
/// Paths are processed sequentially in the order given. A missing or
/// unreadable file only affects its own block.
#[derive(Clone)]
pub struct ComparePapersTool {
    loader: DocumentLoader,
    locator: Arc<AbstractLocator>,
    limits: TextLimits,
}

impl ComparePapersTool {
    pub fn new(loader: DocumentLoader, locator: Arc<AbstractLocator>, limits: TextLimits) -> Self {
        Self {
            loader,
            locator,
            limits,
        }
    }

    fn summarise(&self, paper: &Paper) -> String {
        let found = self
            .locator
            .locate(&paper.text)
            .filter(|text| text.chars().count() > self.limits.abstract_min_chars);

        match found {
            Some(abstract_text) => format!("Abstract:\n{}", abstract_text),
            None => format!(
                "Excerpt:\n{}",
                truncate_chars(paper.text.trim(), self.limits.snippet_chars)
            ),
        }
    }
}

#[async_trait]
impl Tool for ComparePapersTool {
    fn name(&self) -> &'static str {
        "compare_papers"
    }

    fn description(&self) -> &'static str {
        "Compare multiple papers by their abstracts"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paths": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 2
                }
            },
            "required": ["paths"]
        })
    }

    async fn execute(
        &self,
        ctx: ExecutionContext,
        input: serde_json::Value,
    ) -> Result<ToolResponse, ToolError> {
        let input: ComparePapersInput = ToolError::parse_input(input)?;

        if input.paths.len() < 2 {
            return Ok(ToolResponse::text(TOO_FEW_PAPERS_TEXT));
        }

        let mut blocks = Vec::with_capacity(input.paths.len());
        for raw in &input.paths {
            let block = match self.loader.load(raw).await {
                Ok(Lookup::Missing(path)) => {
                    format!("=== {} ===\nError: {}", path.display(), FILE_NOT_FOUND_TEXT)
                }
                Ok(Lookup::Found(paper)) => {
                    format!("=== {} ===\n{}", paper.path.display(), self.summarise(&paper))
                }
                Err(e) => {
                    let label = DocumentLoader::resolve(raw)
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|_| raw.clone());
                    error!(request_id = %ctx.request_id, "Failed to compare {}: {}", label, e);
                    format!("=== {} ===\nError: {}", label, INTERNAL_ERROR_TEXT)
                }
            };
            blocks.push(block);
        }

        info!(request_id = %ctx.request_id, papers = blocks.len(), "Compared papers");

        Ok(ToolResponse::text(blocks.join(BLOCK_SEPARATOR)))
    }
}
