//! Tree command - print the catalog outline

use crate::{
    catalog::TreeCatalog,
    output::{self, OutputWriter},
};

/// Execute the tree command
pub fn execute(catalog: &TreeCatalog, out: &dyn OutputWriter) {
    for line in output::format_tree(catalog) {
        out.write(&line);
    }
    out.info(&format!(
        "{} node(s), depth {}, {} metadata level(s)",
        catalog.len(),
        catalog.max_depth(),
        catalog.num_meta_levels()
    ));
}
