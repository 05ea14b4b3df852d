//! Testing utilities for nodesel
//!
//! Fixture forests shared by the unit tests. They mirror the shapes a
//! selector is typically fed: a single flat node, a two-level tree, and a
//! tree whose first level carries metadata (colors) rather than tag labels.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{CatalogNode, CatalogOptions, DEFAULT_DELIMITER};

/// One root node `Data` with id `1`
#[must_use]
pub fn flat_forest() -> Vec<CatalogNode> {
    vec![
        CatalogNode::new("Data")
            .with_id("1")
            .with_description("Description"),
    ]
}

/// `Data` (`Subdata`, `Other`) followed by `Database` (`Tables`)
#[must_use]
pub fn deep_forest() -> Vec<CatalogNode> {
    vec![
        CatalogNode::new("Data")
            .with_id("1")
            .with_description("Description")
            .with_children([
                CatalogNode::new("Subdata")
                    .with_id("1.1")
                    .with_description("A sub node"),
                CatalogNode::new("Other").with_id("1.2"),
            ]),
        CatalogNode::new("Database")
            .with_id("2")
            .with_children([CatalogNode::new("Tables").with_id("2.1")]),
    ]
}

/// A colored metadata root above two data nodes
#[must_use]
pub fn metadata_forest() -> Vec<CatalogNode> {
    vec![
        CatalogNode::new("Metadata 1")
            .with_id("1")
            .with_description("A first data source")
            .with_color("#0095FF")
            .with_children([
                CatalogNode::new("Node 1")
                    .with_id("1.1.1")
                    .with_description("A first data node")
                    .with_children([CatalogNode::new("Subnode 1")
                        .with_id("1.1.1.1")
                        .with_description("A first sub node")]),
                CatalogNode::new("Node 2").with_id("1.1.2"),
            ]),
    ]
}

/// Options with the default delimiter
#[must_use]
pub const fn options(num_meta_levels: usize, case_insensitive: bool) -> CatalogOptions {
    CatalogOptions {
        delimiter: DEFAULT_DELIMITER,
        num_meta_levels,
        case_insensitive,
    }
}
