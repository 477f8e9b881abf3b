use std::sync::Arc;
use serde::Serialize;
use crate::documents::DocumentLoader;
use crate::error::ToolError;
use crate::extraction::TextExtractor;
use crate::limits::TextLimits;
use crate::sections::AbstractLocator;
use crate::tools::{
    ComparePapersTool, ExtractAbstractTool, PingTool, ReadPdfTool, Tool, UpdatePolicyTool,
};

/// Published metadata for one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Tools in registration order. Names are unique.
pub struct ToolRegistryImpl {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistryImpl {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// The paper-reading tool set, in its published order.
    pub fn paper_tools(
        extractor: Arc<dyn TextExtractor>,
        limits: TextLimits,
    ) -> Result<Self, ToolError> {
        let loader = DocumentLoader::new(extractor);
        let locator = Arc::new(AbstractLocator::new()?);

        let mut registry = Self::new();
        registry
            .register(Arc::new(PingTool))?
            .register(Arc::new(ReadPdfTool::new(loader.clone(), limits)))?
            .register(Arc::new(ExtractAbstractTool::new(
                loader.clone(),
                locator.clone(),
            )))?
            .register(Arc::new(ComparePapersTool::new(loader, locator, limits)))?
            .register(Arc::new(UpdatePolicyTool))?;
        Ok(registry)
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<&mut Self, ToolError> {
        if self.get(tool.name()).is_some() {
            return Err(ToolError::ValidationError(format!(
                "Tool already registered: {}",
                tool.name()
            )));
        }
        self.tools.push(tool);
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    pub fn list(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.name().to_string()).collect()
    }

    pub fn count(&self) -> usize {
        self.tools.len()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.schema(),
            })
            .collect()
    }
}

impl Default for ToolRegistryImpl {
    fn default() -> Self {
        Self::new()
    }
}
