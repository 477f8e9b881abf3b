use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use crate::documents::{DocumentLoader, Lookup, FILE_NOT_FOUND_TEXT};
use crate::error::ToolError;
use crate::execution_context::ExecutionContext;
use crate::sections::{AbstractLocator, ABSTRACT_NOT_FOUND_TEXT};
use crate::tools::base::{Tool, ToolResponse};

#[derive(Deserialize)]
struct ExtractAbstractInput {
    path: String,
}

#[derive(Clone)]
pub struct ExtractAbstractTool {
    loader: DocumentLoader,
    locator: Arc<AbstractLocator>,
}

impl ExtractAbstractTool {
    pub fn new(loader: DocumentLoader, locator: Arc<AbstractLocator>) -> Self {
        Self { loader, locator }
    }
}

#[async_trait]
impl Tool for ExtractAbstractTool {
    fn name(&self) -> &'static str {
        "extract_abstract"
    }

    fn description(&self) -> &'static str {
        "Extract abstract section from PDF"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "path": {"type": "string"}
            },
            "required": ["path"]
        })
    }

    async fn execute(
        &self,
        ctx: ExecutionContext,
        input: serde_json::Value,
    ) -> Result<ToolResponse, ToolError> {
        let input: ExtractAbstractInput = ToolError::parse_input(input)?;

        let paper = match self.loader.load(&input.path).await? {
            Lookup::Missing(_) => return Ok(ToolResponse::text(FILE_NOT_FOUND_TEXT)),
            Lookup::Found(paper) => paper,
        };

        match self.locator.locate(&paper.text) {
            Some(abstract_text) => Ok(ToolResponse::text(abstract_text)),
            None => {
                debug!(request_id = %ctx.request_id, "No abstract in {}", paper.path.display());
                Ok(ToolResponse::text(ABSTRACT_NOT_FOUND_TEXT))
            }
        }
    }
}
