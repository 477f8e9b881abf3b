pub mod base;
pub mod ping;
pub mod read_pdf;
pub mod extract_abstract;
pub mod compare_papers;
pub mod update_policy;

pub use base::{Tool, ToolContent, ToolRequest, ToolResponse};
pub use ping::PingTool;
pub use read_pdf::ReadPdfTool;
pub use extract_abstract::ExtractAbstractTool;
pub use compare_papers::{ComparePapersTool, TOO_FEW_PAPERS_TEXT};
pub use update_policy::UpdatePolicyTool;
