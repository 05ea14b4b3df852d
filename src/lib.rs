//! Nodesel - matching delimited tag paths against a node hierarchy
//!
//! This library backs tree-node selectors: it indexes a forest of named
//! nodes once, then classifies raw tag strings such as `Data:Subdata`
//! (valid, invalid, duplicate, still being typed) and proposes completions
//! for the segment being typed.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod matcher;
pub mod output;

#[cfg(test)]
pub mod testing;

pub use catalog::{CatalogNode, CatalogOptions, SchemaError, TreeCatalog};
pub use matcher::{AcceptedTags, MatchResult, MatchStatus, PathMatcher, Selection, Suggestion};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NodeselError {
    /// Catalog construction failed
    #[error("Schema error: {0}")]
    Schema(#[from] catalog::SchemaError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Results could not be encoded as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, NodeselError>;
