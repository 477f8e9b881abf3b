use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use crate::documents::{DocumentLoader, Lookup, FILE_NOT_FOUND_TEXT};
use crate::error::ToolError;
use crate::execution_context::ExecutionContext;
use crate::limits::{truncate_chars, TextLimits};
use crate::tools::base::{Tool, ToolResponse};

#[derive(Deserialize)]
struct ReadPdfInput {
    path: String,
}

#[derive(Clone)]
pub struct ReadPdfTool {
    loader: DocumentLoader,
    limits: TextLimits,
}

impl ReadPdfTool {
    pub fn new(loader: DocumentLoader, limits: TextLimits) -> Self {
        Self { loader, limits }
    }
}

#[async_trait]
impl Tool for ReadPdfTool {
    fn name(&self) -> &'static str {
        "read_pdf"
    }

    fn description(&self) -> &'static str {
        "Read full text of a PDF file"
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
        let input: ReadPdfInput = ToolError::parse_input(input)?;

        let paper = match self.loader.load(&input.path).await? {
            Lookup::Missing(_) => return Ok(ToolResponse::text(FILE_NOT_FOUND_TEXT)),
            Lookup::Found(paper) => paper,
        };

        info!(
            request_id = %ctx.request_id,
            pages = paper.pages,
            "Read {}",
            paper.path.display()
        );

        Ok(ToolResponse::text(truncate_chars(
            &paper.text,
            self.limits.read_max_chars,
        )))
    }
}
