//! Output formatting for CLI display
//!
//! Formats match results, suggestions and catalog trees for the terminal,
//! and re-exports the [`OutputWriter`] backends that print them.

mod writer;

pub use writer::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::catalog::{NodeRef, TreeCatalog};
use crate::matcher::{MatchResult, MatchStatus, Selection, Suggestion};
use colored::{ColoredString, Colorize};

/// Status word colored the way a selector renders it
#[must_use]
pub fn colorize_status(status: MatchStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        MatchStatus::Valid => label.green(),
        MatchStatus::Invalid => label.red(),
        MatchStatus::Duplicate => label.yellow(),
        MatchStatus::Incomplete => label.dimmed(),
    }
}

/// Format one evaluated tag
///
/// Quiet mode prints `status<TAB>canonical tag` for scripting.
#[must_use]
pub fn format_result(raw: &str, result: &MatchResult, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", result.status, result.canonical_tag);
    }

    let mut line = format!("  {raw:?} {}", colorize_status(result.status));
    if !result.canonical_tag.is_empty() {
        line.push_str(&format!(" [{}]", result.canonical_tag));
    }
    line.push_str(&format!(" (depth {})", result.matched_depth));
    if let Some(color) = &result.color {
        line.push_str(&format!(" color={color}"));
    }
    line
}

/// Format one suggestion with its description
#[must_use]
pub fn format_suggestion(suggestion: &Suggestion, quiet: bool) -> String {
    if quiet {
        return suggestion.completion.clone();
    }

    let mut line = format!("  {}", suggestion.value.bold());
    if suggestion.num_children > 0 {
        line.push_str(&format!(" (+{})", suggestion.num_children));
    }
    if let Some(help) = &suggestion.help {
        line.push_str(&format!("  {}", help.dimmed()));
    }
    if suggestion.already_accepted {
        line.push_str(&format!(" {}", "(selected)".yellow()));
    }
    line
}

/// Summary lines for the selected tags, nodes and ids
#[must_use]
pub fn format_selection(selection: &Selection) -> Vec<String> {
    vec![
        format!("selected tags:  {}", selection.selected_tags.join(", ")),
        format!("selected nodes: {}", selection.selected_nodes.join(", ")),
        format!("selected ids:   {}", selection.selected_ids.join(", ")),
    ]
}

/// Indented outline of the whole catalog, one node per line
///
/// Inner nodes show their child count as `(+N)`.
#[must_use]
pub fn format_tree(catalog: &TreeCatalog) -> Vec<String> {
    let mut lines = Vec::with_capacity(catalog.len());
    let mut stack: Vec<NodeRef<'_>> = catalog.roots().collect();
    stack.reverse();

    while let Some(node) = stack.pop() {
        let mut line = format!("{}{}", "  ".repeat(node.depth()), node.name());
        if let Some(id) = node.id() {
            line.push_str(&format!(" #{id}"));
        }
        if !node.is_leaf() {
            line.push_str(&format!(" (+{})", node.num_children()));
        }
        if node.depth() < catalog.num_meta_levels() {
            line.push_str(" (meta)");
        }
        lines.push(line);

        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.extend(children);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOptions;
    use crate::matcher::{AcceptedTags, PathMatcher};
    use crate::testing::{deep_forest, metadata_forest, options};

    #[test]
    fn test_format_result_quiet() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let result = PathMatcher::new(&catalog).evaluate("Data:Subdata", &AcceptedTags::new());
        assert_eq!(format_result("Data:Subdata", &result, true), "Valid\tData:Subdata");
    }

    #[test]
    fn test_format_result_verbose() {
        let catalog = TreeCatalog::build(metadata_forest(), options(1, false)).unwrap();
        let result = PathMatcher::new(&catalog).evaluate("Metadata 1:Node 1", &AcceptedTags::new());
        let line = format_result("Metadata 1:Node 1", &result, false);
        assert!(line.contains("Valid"));
        assert!(line.contains("[Node 1]"));
        assert!(line.contains("(depth 2)"));
        assert!(line.contains("color=#0095FF"));
    }

    #[test]
    fn test_format_suggestion() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let matcher = PathMatcher::new(&catalog);
        let suggestions = matcher.suggest_candidates("Dat", &AcceptedTags::new(), None);

        assert_eq!(format_suggestion(&suggestions[0], true), "Data");
        let line = format_suggestion(&suggestions[0], false);
        assert!(line.contains("Data"));
        assert!(line.contains("(+2)"));
        assert!(line.contains("Description"));
    }

    #[test]
    fn test_format_tree() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        assert_eq!(
            format_tree(&catalog),
            vec![
                "Data #1 (+2)",
                "  Subdata #1.1",
                "  Other #1.2",
                "Database #2 (+1)",
                "  Tables #2.1",
            ]
        );
    }

    #[test]
    fn test_format_tree_marks_meta_levels() {
        let catalog = TreeCatalog::build(metadata_forest(), options(1, false)).unwrap();
        let lines = format_tree(&catalog);
        assert_eq!(lines[0], "Metadata 1 #1 (+2) (meta)");
        assert_eq!(lines[1], "  Node 1 #1.1.1 (+1)");
    }

    #[test]
    fn test_format_selection() {
        let selection = Selection {
            selected_tags: vec!["Data".to_string()],
            selected_nodes: vec!["Data".to_string()],
            selected_ids: vec!["1".to_string()],
        };
        let lines = format_selection(&selection);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with('1'));
    }
}
