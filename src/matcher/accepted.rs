use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::catalog::{TreeCatalog, fold_case};

/// Tag strings the caller has already accepted
///
/// Owned by the caller and only borrowed for the duration of one call.
/// Entries are stored as given, next to a count of their case-folded
/// forms, so one set can serve catalogs with either case handling and
/// every lookup is a single hash probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashSet<String>", into = "HashSet<String>")]
pub struct AcceptedTags {
    tags: HashSet<String>,
    folded: HashMap<String, usize>,
}

impl AcceptedTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, returning `false` if the exact string was already present
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.tags.contains(&tag) {
            return false;
        }
        *self.folded.entry(fold_case(&tag)).or_default() += 1;
        self.tags.insert(tag)
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        if !self.tags.remove(tag) {
            return false;
        }
        let key = fold_case(tag);
        if let Some(count) = self.folded.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.folded.remove(&key);
            }
        }
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Whether `tag` collides with an accepted entry under the catalog's case handling
    #[must_use]
    pub fn contains(&self, catalog: &TreeCatalog, tag: &str) -> bool {
        if catalog.case_insensitive() {
            self.folded.contains_key(&fold_case(tag))
        } else {
            self.tags.contains(tag)
        }
    }
}

impl<S: Into<String>> FromIterator<S> for AcceptedTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut accepted = Self::new();
        accepted.extend(iter);
        accepted
    }
}

impl<S: Into<String>> Extend<S> for AcceptedTags {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl From<HashSet<String>> for AcceptedTags {
    fn from(tags: HashSet<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<AcceptedTags> for HashSet<String> {
    fn from(accepted: AcceptedTags) -> Self {
        accepted.tags
    }
}
