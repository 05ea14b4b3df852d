//! Hierarchical node catalog
//!
//! A [`TreeCatalog`] is built once from a forest of [`CatalogNode`]s and is
//! read-only afterwards. It answers the structural questions the matcher
//! needs: which nodes can follow a given prefix, does a path exist, and how
//! names compare under the configured case handling.
//!
//! # Examples
//!
//! ```
//! use nodesel::catalog::{CatalogNode, CatalogOptions, TreeCatalog};
//!
//! let forest = vec![
//!     CatalogNode::new("Data").with_children([CatalogNode::new("Subdata")]),
//! ];
//! let catalog = TreeCatalog::build(forest, CatalogOptions::default())?;
//!
//! assert!(catalog.contains_path(&["Data", "Subdata"]));
//! assert_eq!(catalog.children_at(&["Data"]).len(), 1);
//! # Ok::<(), nodesel::catalog::SchemaError>(())
//! ```

pub mod error;
mod index;
pub mod types;

pub use error::{Result, SchemaError};
pub use index::{NodeRef, TreeCatalog};
pub use types::{CatalogNode, CatalogOptions, CatalogWarning, DEFAULT_DELIMITER, NodeMetadata, fold_case};

use std::path::Path;

/// Read a forest JSON file from disk and build a catalog from it
///
/// # Errors
/// Returns `crate::NodeselError::Io` if the file cannot be read and
/// `crate::NodeselError::Schema` if the forest is rejected.
pub fn load_catalog(path: &Path, options: CatalogOptions) -> crate::Result<TreeCatalog> {
    let content = std::fs::read_to_string(path)?;
    Ok(TreeCatalog::from_json(&content, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("forest.json");
        fs::write(&path, r#"[{"name": "Data", "children": [{"name": "Subdata"}]}]"#).unwrap();

        let catalog = load_catalog(&path, CatalogOptions::default()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_catalog(&temp_dir.path().join("missing.json"), CatalogOptions::default());
        assert!(matches!(result, Err(crate::NodeselError::Io(_))));
    }

    #[test]
    fn test_load_catalog_cycle_is_schema_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cycle.json");
        fs::write(
            &path,
            r#"[{"id": "a", "name": "A", "children": [{"id": "a", "name": "B"}]}]"#,
        )
        .unwrap();

        let result = load_catalog(&path, CatalogOptions::default());
        assert!(matches!(
            result,
            Err(crate::NodeselError::Schema(SchemaError::Cycle { .. }))
        ));
    }
}
