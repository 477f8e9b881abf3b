use async_trait::async_trait;
use serde_json::json;
use crate::error::ToolError;
use crate::execution_context::ExecutionContext;
use crate::tools::base::{Tool, ToolResponse};

/// Liveness check. Ignores its arguments.
pub struct PingTool;

#[async_trait]
impl Tool for PingTool {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn description(&self) -> &'static str {
        "Test tool"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        _ctx: ExecutionContext,
        _input: serde_json::Value,
    ) -> Result<ToolResponse, ToolError> {
        Ok(ToolResponse::text("pong"))
    }
}
