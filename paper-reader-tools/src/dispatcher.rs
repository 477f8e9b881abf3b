use std::sync::Arc;
use tracing::{error, info, warn};
use crate::error::ToolError;
use crate::execution_context::ExecutionContext;
use crate::policy::{AnalysisPolicy, PolicyStore};
use crate::registry::{ToolDescriptor, ToolRegistryImpl};
use crate::tools::{Tool, ToolRequest, ToolResponse};

pub const UNKNOWN_TOOL_TEXT: &str = "Unknown tool requested.";
pub const INTERNAL_ERROR_TEXT: &str = "Internal server error.";

/// Routes tool requests and folds every outcome into a [`ToolResponse`].
///
/// Unknown names and tool failures never surface as errors: the caller gets a
/// fixed message, and failure details only go to the log.
pub struct ToolDispatcherImpl {
    registry: Arc<ToolRegistryImpl>,
    policy: PolicyStore,
}

impl ToolDispatcherImpl {
    pub fn new(registry: Arc<ToolRegistryImpl>) -> Self {
        Self {
            registry,
            policy: PolicyStore::new(),
        }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.descriptors()
    }

    /// Currently committed analysis policy.
    pub fn policy(&self) -> Option<AnalysisPolicy> {
        self.policy.current()
    }

    pub async fn dispatch(&self, request: ToolRequest) -> ToolResponse {
        let ToolRequest { name, arguments } = request;

        let Some(tool) = self.registry.get(&name) else {
            warn!("Unknown tool requested: {}", name);
            return ToolResponse::text(UNKNOWN_TOOL_TEXT);
        };

        let ctx = ExecutionContext::new(self.policy.clone());
        info!("Dispatching tool: {} (request {})", name, ctx.request_id);

        match self.execute_with_protection(tool, ctx, arguments).await {
            Ok(response) => response,
            Err(e) => {
                error!("Tool execution error in {}: {}", name, e);
                ToolResponse::text(INTERNAL_ERROR_TEXT)
            }
        }
    }

    async fn execute_with_protection(
        &self,
        tool: Arc<dyn Tool>,
        ctx: ExecutionContext,
        input: serde_json::Value,
    ) -> Result<ToolResponse, ToolError> {
        // Spawn task to isolate panics
        let handle = tokio::spawn(async move { tool.execute(ctx, input).await });

        match handle.await {
            Ok(result) => result,
            Err(join_err) => {
                if join_err.is_panic() {
                    error!("Tool execution panicked");
                } else {
                    error!("Tool execution cancelled");
                }
                Err(ToolError::Internal)
            }
        }
    }
}
