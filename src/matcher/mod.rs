//! Delimited path matching against a [`TreeCatalog`]
//!
//! A raw tag such as `Data:Subdata` is split on the catalog delimiter and
//! walked one level at a time:
//! - each segment resolves to the **first** sibling whose (case-folded) name
//!   equals it, in declaration order
//! - a trailing segment that only prefixes a sibling name means the tag is
//!   still being typed (`Incomplete`)
//! - any other failure makes the tag `Invalid`
//! - a tag whose canonical form is already accepted is a `Duplicate`, even
//!   when it is structurally invalid
//!
//! Every call is a pure function of the catalog, the input string and the
//! borrowed accepted set. Malformed input never produces an error.
//!
//! # Examples
//!
//! ```
//! use nodesel::catalog::{CatalogNode, CatalogOptions, TreeCatalog};
//! use nodesel::matcher::{AcceptedTags, MatchStatus, PathMatcher};
//!
//! let forest = vec![
//!     CatalogNode::new("Data").with_children([CatalogNode::new("Subdata")]),
//! ];
//! let catalog = TreeCatalog::build(forest, CatalogOptions::default())?;
//! let matcher = PathMatcher::new(&catalog);
//!
//! let result = matcher.evaluate("Data:Subdata", &AcceptedTags::new());
//! assert_eq!(result.status, MatchStatus::Valid);
//! assert_eq!(result.canonical_tag, "Data:Subdata");
//!
//! let result = matcher.evaluate("Data:Sub", &AcceptedTags::new());
//! assert_eq!(result.status, MatchStatus::Incomplete);
//! assert_eq!(result.matched_depth, 1);
//! # Ok::<(), nodesel::catalog::SchemaError>(())
//! ```

mod accepted;
mod batch;
mod suggest;

pub use accepted::AcceptedTags;
pub use batch::Selection;
pub use suggest::Suggestion;

use serde::Serialize;
use std::fmt;

use crate::catalog::TreeCatalog;

/// Classification of one raw tag string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Every segment resolved to a node
    Valid,
    /// Some segment cannot resolve, even with more typing
    Invalid,
    /// The canonical tag is already in the accepted set
    Duplicate,
    /// Empty, or the last segment is a prefix of a candidate name
    Incomplete,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
            Self::Duplicate => "Duplicate",
            Self::Incomplete => "Incomplete",
        };
        f.write_str(label)
    }
}

/// Outcome of evaluating one raw tag string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub status: MatchStatus,
    /// Status before the duplicate check, never `Duplicate`
    pub structural_status: MatchStatus,
    /// Ids of the matched non-metadata nodes; a node without an id contributes its name
    pub matched_path_ids: Vec<String>,
    /// Non-metadata labels joined with the delimiter
    pub canonical_tag: String,
    /// Number of segments that resolved before the walk stopped
    pub matched_depth: usize,
    /// Declared names of every matched node, metadata levels included
    pub matched_names: Vec<String>,
    /// Names of the matched metadata-level nodes
    pub meta_labels: Vec<String>,
    /// Id of the deepest matched node
    pub node_id: Option<String>,
    /// Nearest color on the matched path, deepest node first
    pub color: Option<String>,
    /// Nearest icon on the matched path, deepest node first
    pub icon: Option<String>,
}

impl MatchResult {
    fn empty(status: MatchStatus) -> Self {
        Self {
            status,
            structural_status: status,
            matched_path_ids: Vec::new(),
            canonical_tag: String::new(),
            matched_depth: 0,
            matched_names: Vec::new(),
            meta_labels: Vec::new(),
            node_id: None,
            color: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == MatchStatus::Valid
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        self.status == MatchStatus::Duplicate
    }

    /// Whether every segment resolved, independent of duplicate status
    #[must_use]
    pub fn is_structurally_matched(&self) -> bool {
        self.structural_status == MatchStatus::Valid
    }

    /// Short text describing the tag, as shown on hover
    ///
    /// Valid tags show their canonical form; everything else shows the status.
    #[must_use]
    pub fn title(&self) -> String {
        match self.status {
            MatchStatus::Valid => self.canonical_tag.clone(),
            other => other.to_string(),
        }
    }
}

/// Result of walking segments down the catalog
pub(crate) struct Walk<'c, 's> {
    pub(crate) segments: Vec<&'s str>,
    /// Arena indices of matched nodes, one per resolved segment
    pub(crate) matched: Vec<usize>,
    /// Siblings available for the first unresolved segment
    pub(crate) candidates: &'c [usize],
}

impl Walk<'_, '_> {
    fn fully_matched(&self) -> bool {
        self.matched.len() == self.segments.len()
    }
}

/// Stateless matcher over a shared catalog
#[derive(Debug, Clone, Copy)]
pub struct PathMatcher<'c> {
    catalog: &'c TreeCatalog,
}

impl<'c> PathMatcher<'c> {
    #[must_use]
    pub const fn new(catalog: &'c TreeCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c TreeCatalog {
        self.catalog
    }

    /// Split a raw string into segments, keeping empty ones
    #[must_use]
    pub fn segments<'s>(&self, raw: &'s str) -> Vec<&'s str> {
        raw.split(self.catalog.delimiter()).collect()
    }

    pub(crate) fn walk<'s>(&self, segments: Vec<&'s str>) -> Walk<'c, 's> {
        let catalog = self.catalog;
        let mut candidates = catalog.root_ids();
        let mut matched = Vec::with_capacity(segments.len());

        for segment in &segments {
            match catalog.find_child(candidates, segment) {
                Some(idx) => {
                    matched.push(idx);
                    candidates = &catalog.node(idx).children;
                }
                None => break,
            }
        }

        Walk {
            segments,
            matched,
            candidates,
        }
    }

    /// Classify one raw tag string
    ///
    /// Never fails: any input, including empty or delimiter-only strings,
    /// yields a [`MatchResult`].
    #[must_use]
    pub fn evaluate(&self, raw: &str, accepted: &AcceptedTags) -> MatchResult {
        if raw.is_empty() {
            return MatchResult::empty(MatchStatus::Incomplete);
        }

        let walk = self.walk(self.segments(raw));
        let mut result = self.describe(&walk);
        result.structural_status = self.classify(&walk);
        result.status = result.structural_status;

        if !result.canonical_tag.is_empty() && accepted.contains(self.catalog, &result.canonical_tag)
        {
            result.status = MatchStatus::Duplicate;
        }
        result
    }

    fn classify(&self, walk: &Walk<'_, '_>) -> MatchStatus {
        let catalog = self.catalog;

        if walk.fully_matched() {
            // Stopping inside the metadata levels leaves nothing to select yet
            return if walk.matched.len() > catalog.num_meta_levels() {
                MatchStatus::Valid
            } else {
                MatchStatus::Incomplete
            };
        }

        let failed_at = walk.matched.len();
        let is_last = failed_at + 1 == walk.segments.len();
        let segment = walk.segments[failed_at];

        if is_last && !segment.is_empty() {
            let prefix = catalog.normalize(segment);
            let typing = walk
                .candidates
                .iter()
                .any(|&idx| catalog.node(idx).key.starts_with(prefix.as_ref()));
            if typing {
                return MatchStatus::Incomplete;
            }
        }
        MatchStatus::Invalid
    }

    /// Everything about the walk except its final status
    fn describe(&self, walk: &Walk<'_, '_>) -> MatchResult {
        let catalog = self.catalog;
        let meta = catalog.num_meta_levels();
        let nodes: Vec<_> = walk.matched.iter().map(|&idx| catalog.node(idx)).collect();

        // Matched segments take the declared spelling, the rest stay as typed
        let labels: Vec<&str> = walk
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| nodes.get(i).map_or(*segment, |n| n.name.as_str()))
            .collect();
        let delimiter = catalog.delimiter().to_string();
        let canonical_tag = labels
            .get(meta..)
            .map(|rest| rest.join(delimiter.as_str()))
            .unwrap_or_default();

        let (meta_nodes, tag_nodes) = nodes.split_at(meta.min(nodes.len()));

        MatchResult {
            status: MatchStatus::Invalid,
            structural_status: MatchStatus::Invalid,
            matched_path_ids: tag_nodes
                .iter()
                .map(|n| n.id.clone().unwrap_or_else(|| n.name.clone()))
                .collect(),
            canonical_tag,
            matched_depth: walk.matched.len(),
            matched_names: nodes.iter().map(|n| n.name.clone()).collect(),
            meta_labels: meta_nodes.iter().map(|n| n.name.clone()).collect(),
            node_id: nodes.last().and_then(|n| n.id.clone()),
            color: nodes.iter().rev().find_map(|n| n.color.clone()),
            icon: nodes.iter().rev().find_map(|n| n.icon.clone()),
        }
    }
}
