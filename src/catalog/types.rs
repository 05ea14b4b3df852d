use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{Result, SchemaError};

/// Default separator between path segments
pub const DEFAULT_DELIMITER: char = ':';

/// Lowercase `text` one character at a time
///
/// Unlike `str::to_lowercase`, the result for a character never depends on
/// its neighbours, so folding preserves prefixes.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// One node of the source forest, as supplied by the host
///
/// Only `name` is required. `color` and `icon` are never interpreted here;
/// they are carried through so the caller can style matched tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogNode {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Ordered children; empty means leaf
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CatalogNode>,
}

impl CatalogNode {
    /// Create a leaf node with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            description: None,
            color: None,
            icon: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append children in declaration order
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Settings fixed at catalog construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Separator between path segments in raw tag strings
    pub delimiter: char,
    /// Number of leading levels excluded from the canonical tag
    pub num_meta_levels: usize,
    /// Compare names after lowercasing
    pub case_insensitive: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            num_meta_levels: 0,
            case_insensitive: false,
        }
    }
}

impl CatalogOptions {
    /// Parse a delimiter given as text (e.g. from a command line flag)
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidDelimiter` unless the text is exactly one
    /// usable character.
    pub fn parse_delimiter(text: &str) -> Result<char> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::validate_delimiter(c)?;
                Ok(c)
            }
            (None, _) => Err(SchemaError::InvalidDelimiter(
                "delimiter must not be empty".to_string(),
            )),
            (Some(_), Some(_)) => Err(SchemaError::InvalidDelimiter(format!(
                "'{text}' is more than one character"
            ))),
        }
    }

    /// Whitespace and control characters cannot separate segments
    pub(crate) fn validate_delimiter(delimiter: char) -> Result<()> {
        if delimiter.is_whitespace() || delimiter.is_control() {
            return Err(SchemaError::InvalidDelimiter(format!(
                "{delimiter:?} is whitespace or a control character"
            )));
        }
        Ok(())
    }
}

/// Information about a single node, without its subtree
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NodeMetadata {
    pub id: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub num_children: usize,
}

/// Non-fatal problem found while building a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// The node name contains the delimiter and can never be matched as one segment
    DelimiterInName { path: String, name: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DelimiterInName { path, name } => write!(
                f,
                "node '{name}' at '{path}' contains the delimiter and cannot be matched"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_node() {
        let node: CatalogNode = serde_json::from_str(r#"{"name": "Data"}"#).unwrap();
        assert_eq!(node, CatalogNode::new("Data"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_deserialize_nested_node() {
        let json = r##"{
            "id": "1",
            "name": "Metadata 1",
            "color": "#0095FF",
            "children": [{"id": "1.1", "name": "Node 1", "description": "A node"}]
        }"##;
        let node: CatalogNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.color.as_deref(), Some("#0095FF"));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].description.as_deref(), Some("A node"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<CatalogNode, _> =
            serde_json::from_str(r#"{"name": "Data", "colour": "red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        let result: std::result::Result<CatalogNode, _> =
            serde_json::from_str(r#"{"id": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(CatalogOptions::parse_delimiter(":").unwrap(), ':');
        assert_eq!(CatalogOptions::parse_delimiter("/").unwrap(), '/');
        assert!(CatalogOptions::parse_delimiter("").is_err());
        assert!(CatalogOptions::parse_delimiter("::").is_err());
        assert!(CatalogOptions::parse_delimiter(" ").is_err());
        assert!(CatalogOptions::parse_delimiter("\t").is_err());
    }

    #[test]
    fn test_default_options() {
        let options = CatalogOptions::default();
        assert_eq!(options.delimiter, ':');
        assert_eq!(options.num_meta_levels, 0);
        assert!(!options.case_insensitive);
    }
}
