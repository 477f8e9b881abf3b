pub mod error;
pub mod execution_context;
pub mod extraction;
pub mod documents;
pub mod sections;
pub mod limits;
pub mod policy;
pub mod tools;
pub mod registry;
pub mod dispatcher;

pub use dispatcher::{ToolDispatcherImpl, INTERNAL_ERROR_TEXT, UNKNOWN_TOOL_TEXT};
pub use registry::{ToolDescriptor, ToolRegistryImpl};
pub use error::ToolError;
pub use tools::{Tool, ToolContent, ToolRequest, ToolResponse};
pub use execution_context::ExecutionContext;
pub use extraction::{ExtractedText, LopdfExtractor, TextExtractor};
pub use documents::{DocumentLoader, Lookup, Paper, FILE_NOT_FOUND_TEXT};
pub use sections::{AbstractLocator, ABSTRACT_NOT_FOUND_TEXT};
pub use limits::TextLimits;
pub use policy::{AnalysisPolicy, PolicyStore};
