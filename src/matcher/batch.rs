//! Sequential evaluation of several tags (paste of a tag run) and the
//! selection summary reported back to the host

use serde::Serialize;

use super::{AcceptedTags, MatchResult, MatchStatus, PathMatcher};

impl PathMatcher<'_> {
    /// Evaluate tags left to right, each against everything accepted before it
    ///
    /// The canonical tag of every evaluated item is folded into a working
    /// copy of `preexisting` before the next item runs, so the second of two
    /// identical tags in one batch is a duplicate of the first. The caller's
    /// set is left untouched.
    #[must_use]
    pub fn evaluate_batch<I, S>(&self, raws: I, preexisting: &AcceptedTags) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = preexisting.clone();
        raws.into_iter()
            .map(|raw| {
                let result = self.evaluate(raw.as_ref(), &accepted);
                if !result.canonical_tag.is_empty() {
                    accepted.insert(result.canonical_tag.clone());
                }
                result
            })
            .collect()
    }

    /// Summarize what a list of tags actually selects
    #[must_use]
    pub fn selection(&self, results: &[MatchResult]) -> Selection {
        Selection::from_results(results, self.catalog.delimiter())
    }
}

/// Unique selected values derived from a list of evaluated tags
///
/// Only structurally valid, non-duplicate results contribute, each at most
/// once, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Canonical tags (metadata levels stripped)
    pub selected_tags: Vec<String>,
    /// Full node paths, metadata levels included
    pub selected_nodes: Vec<String>,
    /// Ids of the selected nodes that have one
    pub selected_ids: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn from_results(results: &[MatchResult], delimiter: char) -> Self {
        let delimiter = delimiter.to_string();
        let mut selection = Self::default();

        for result in results.iter().filter(|r| r.status == MatchStatus::Valid) {
            if selection.selected_tags.contains(&result.canonical_tag) {
                continue;
            }
            selection.selected_tags.push(result.canonical_tag.clone());
            selection
                .selected_nodes
                .push(result.matched_names.join(delimiter.as_str()));
            if let Some(id) = &result.node_id {
                selection.selected_ids.push(id.clone());
            }
        }

        selection
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogOptions, TreeCatalog};
    use crate::testing::{deep_forest, flat_forest, metadata_forest, options};

    fn statuses(results: &[MatchResult]) -> Vec<MatchStatus> {
        results.iter().map(|r| r.status).collect()
    }

    #[test]
    fn test_batch_folds_each_result() {
        let catalog = TreeCatalog::build(flat_forest(), CatalogOptions::default()).unwrap();
        let matcher = PathMatcher::new(&catalog);

        let results = matcher.evaluate_batch(["Data", "Data", "Data"], &AcceptedTags::new());
        assert_eq!(
            statuses(&results),
            vec![MatchStatus::Valid, MatchStatus::Duplicate, MatchStatus::Duplicate]
        );
        // All three still point at the same node
        assert!(results.iter().all(|r| r.matched_path_ids == vec!["1"]));
    }

    #[test]
    fn test_batch_respects_preexisting() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let matcher = PathMatcher::new(&catalog);
        let preexisting: AcceptedTags = ["Data"].into_iter().collect();

        let results = matcher.evaluate_batch(["Data", "Data:Subdata", "Database"], &preexisting);
        assert_eq!(
            statuses(&results),
            vec![MatchStatus::Duplicate, MatchStatus::Valid, MatchStatus::Valid]
        );
        assert_eq!(preexisting.len(), 1);
    }

    #[test]
    fn test_batch_matches_sequential_evaluate() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let matcher = PathMatcher::new(&catalog);
        let raws = ["Data", "Dat", "Data:Other", "Data"];

        let batch = matcher.evaluate_batch(raws, &AcceptedTags::new());

        let mut accepted = AcceptedTags::new();
        for (raw, from_batch) in raws.iter().zip(&batch) {
            let single = matcher.evaluate(raw, &accepted);
            assert_eq!(&single, from_batch);
            accepted.insert(single.canonical_tag);
        }
    }

    #[test]
    fn test_batch_case_insensitive() {
        let catalog = TreeCatalog::build(deep_forest(), options(0, true)).unwrap();
        let matcher = PathMatcher::new(&catalog);
        let results = matcher.evaluate_batch(["data", "DATA"], &AcceptedTags::new());
        assert_eq!(
            statuses(&results),
            vec![MatchStatus::Valid, MatchStatus::Duplicate]
        );
    }

    #[test]
    fn test_empty_batch() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let matcher = PathMatcher::new(&catalog);
        assert!(matcher
            .evaluate_batch(Vec::<String>::new(), &AcceptedTags::new())
            .is_empty());
    }

    #[test]
    fn test_selection_of_pasted_copies() {
        let catalog = TreeCatalog::build(flat_forest(), CatalogOptions::default()).unwrap();
        let matcher = PathMatcher::new(&catalog);

        let results = matcher.evaluate_batch(
            ["Data", "Data", "Data", "Data", "Data", "Data"],
            &AcceptedTags::new(),
        );
        let selection = matcher.selection(&results);
        assert_eq!(selection.selected_tags, vec!["Data"]);
        assert_eq!(selection.selected_nodes, vec!["Data"]);
        assert_eq!(selection.selected_ids, vec!["1"]);
    }

    #[test]
    fn test_selection_skips_invalid_and_keeps_meta_in_nodes() {
        let catalog = TreeCatalog::build(metadata_forest(), options(1, false)).unwrap();
        let matcher = PathMatcher::new(&catalog);

        let results = matcher.evaluate_batch(
            ["Metadata 1:Node 1", "Metadata 1:Nope", "Metadata 1", "Metadata 1:Node 2"],
            &AcceptedTags::new(),
        );
        let selection = matcher.selection(&results);
        assert_eq!(selection.selected_tags, vec!["Node 1", "Node 2"]);
        assert_eq!(
            selection.selected_nodes,
            vec!["Metadata 1:Node 1", "Metadata 1:Node 2"]
        );
        assert_eq!(selection.selected_ids, vec!["1.1.1", "1.1.2"]);
    }

    #[test]
    fn test_selection_empty() {
        let selection = Selection::from_results(&[], ':');
        assert!(selection.is_empty());
    }
}
