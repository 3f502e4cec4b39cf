//! Error types for the model crate.

/// Errors raised when parsing a diff document.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The document is not valid JSON or does not match the tree schema.
    #[error("malformed diff document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
