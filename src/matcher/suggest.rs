//! Autocomplete suggestions for the segment being typed

use serde::Serialize;
use std::collections::HashSet;

use super::{AcceptedTags, PathMatcher};

/// A completion entry for the segment currently being typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Node name to insert for the last segment
    pub value: String,
    /// The whole raw string with the last segment completed
    pub completion: String,
    /// Node description, shown alongside the value
    pub help: Option<String>,
    pub num_children: usize,
    /// Completing to this node would produce an already accepted tag
    pub already_accepted: bool,
}

impl PathMatcher<'_> {
    /// Names that can complete the last segment of `raw`
    ///
    /// Exact matches of the typed text come first, then the remaining
    /// prefix matches in declaration order. Of several siblings whose names
    /// fold to the same key, only the first declared is offered. An
    /// unresolvable prefix or an unknown partial segment yields an empty list.
    #[must_use]
    pub fn suggest(
        &self,
        raw: &str,
        accepted: &AcceptedTags,
        max_results: Option<usize>,
    ) -> Vec<String> {
        self.suggest_candidates(raw, accepted, max_results)
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    /// Like [`Self::suggest`], with descriptions and duplicate markers
    #[must_use]
    pub fn suggest_candidates(
        &self,
        raw: &str,
        accepted: &AcceptedTags,
        max_results: Option<usize>,
    ) -> Vec<Suggestion> {
        let catalog = self.catalog;
        let segments = self.segments(raw);
        let Some((typed, prefix)) = segments.split_last() else {
            return Vec::new();
        };

        let walk = self.walk(prefix.to_vec());
        if !walk.fully_matched() {
            return Vec::new();
        }

        let needle = catalog.normalize(typed);
        let (exact, partial): (Vec<usize>, Vec<usize>) = walk
            .candidates
            .iter()
            .copied()
            .filter(|&idx| catalog.node(idx).key.starts_with(needle.as_ref()))
            .partition(|&idx| catalog.node(idx).key == needle.as_ref());

        let delimiter = catalog.delimiter().to_string();
        let mut path: Vec<&str> = walk
            .matched
            .iter()
            .map(|&idx| catalog.node(idx).name.as_str())
            .collect();

        // Siblings that fold to one key are only reachable through the first
        let mut seen = HashSet::new();
        exact
            .into_iter()
            .chain(partial)
            .filter(|&idx| seen.insert(catalog.node(idx).key.as_str()))
            .take(max_results.unwrap_or(usize::MAX))
            .map(|idx| {
                let node = catalog.node_ref(idx);
                path.push(node.name());
                let completion = path.join(delimiter.as_str());
                let already_accepted = path.len() > catalog.num_meta_levels()
                    && accepted.contains(
                        catalog,
                        &path[catalog.num_meta_levels()..].join(delimiter.as_str()),
                    );
                path.pop();

                Suggestion {
                    value: node.name().to_string(),
                    completion,
                    help: node.description().map(str::to_string),
                    num_children: node.num_children(),
                    already_accepted,
                }
            })
            .collect()
    }
}
