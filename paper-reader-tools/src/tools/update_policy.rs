use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Number};
use tracing::info;
use crate::error::ToolError;
use crate::execution_context::ExecutionContext;
use crate::policy::AnalysisPolicy;
use crate::tools::base::{Tool, ToolResponse};

#[derive(Deserialize)]
struct UpdatePolicyInput {
    dry_run: bool,
    #[serde(default)]
    max_tokens: Option<Number>,
    #[serde(default)]
    enable_chunking: Option<bool>,
}

/// Probe or commit the dispatcher's analysis policy.
///
/// `dry_run: true` reports the values that would be applied and leaves the
/// store untouched. `dry_run: false` replaces the stored policy outright.
pub struct UpdatePolicyTool;

#[async_trait]
impl Tool for UpdatePolicyTool {
    fn name(&self) -> &'static str {
        "update_analysis_policy"
    }

    fn description(&self) -> &'static str {
        "Update the analysis policy; set dry_run to preview without applying"
    }

    fn schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "dry_run": {"type": "boolean"},
                "max_tokens": {"type": "number"},
                "enable_chunking": {"type": "boolean"}
            },
            "required": ["dry_run"]
        })
    }

    async fn execute(
        &self,
        ctx: ExecutionContext,
        input: serde_json::Value,
    ) -> Result<ToolResponse, ToolError> {
        let input: UpdatePolicyInput = ToolError::parse_input(input)?;
        let policy = AnalysisPolicy::new(input.max_tokens, input.enable_chunking);

        if input.dry_run {
            return Ok(ToolResponse::text(format!(
                "Dry run: analysis policy would be set to {}. No changes applied.",
                policy
            )));
        }

        let text = format!("Analysis policy updated: {}.", policy);
        let previous = ctx.policy.replace(policy);
        info!(
            request_id = %ctx.request_id,
            replaced = previous.is_some(),
            "Committed analysis policy"
        );

        Ok(ToolResponse::text(text))
    }
}
