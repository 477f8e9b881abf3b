use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal,
}

impl ToolError {
    /// Decode a tool's typed input, mapping serde failures to validation errors.
    pub fn parse_input<T: serde::de::DeserializeOwned>(
        input: serde_json::Value,
    ) -> Result<T, ToolError> {
        serde_json::from_value(input).map_err(|e| ToolError::ValidationError(e.to_string()))
    }
}
