use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Forest JSON could not be parsed or has the wrong shape
    #[error("Malformed forest: {0}")]
    Json(#[from] serde_json::Error),

    /// A node was declared without a usable name
    #[error("Node at '{0}' has an empty name")]
    EmptyName(String),

    /// Delimiter is not usable as a path separator
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// A node lists one of its own ancestors as a descendant
    #[error("Cycle detected: node '{id}' appears below itself at '{path}'")]
    Cycle { id: String, path: String },
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SchemaError>;
