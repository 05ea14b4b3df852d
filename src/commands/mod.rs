//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args, a built catalog and an output writer.

pub mod batch;
pub mod check;
pub mod suggest;
pub mod tree;

// Re-export execute functions for convenience
pub use batch::execute as batch;
pub use check::execute as check;
pub use suggest::execute as suggest;
pub use tree::execute as tree;

use crate::{
    Result,
    catalog::{self, TreeCatalog},
    config::NodeselConfig,
    output::OutputWriter,
};
use std::path::Path;

/// Load the forest file and report integrity warnings through `out`
///
/// # Errors
/// Returns an error if the file cannot be read, the configured delimiter is
/// unusable, or the forest is rejected.
pub fn open_catalog(
    forest: &Path,
    config: &NodeselConfig,
    out: &dyn OutputWriter,
) -> Result<TreeCatalog> {
    let catalog = catalog::load_catalog(forest, config.catalog_options()?)?;

    for warning in catalog.warnings() {
        out.warning(&warning.to_string());
    }
    out.info(&format!(
        "Loaded {} node(s) from {}",
        catalog.len(),
        forest.display()
    ));

    Ok(catalog)
}
