use std::borrow::Cow;
use std::collections::HashSet;

use super::error::{Result, SchemaError};
use super::types::{CatalogNode, CatalogOptions, CatalogWarning, NodeMetadata, fold_case};

/// A node stored in the catalog arena
#[derive(Debug, Clone)]
pub(crate) struct IndexedNode {
    pub(crate) name: String,
    /// Name after case folding, compared against normalized segments
    pub(crate) key: String,
    pub(crate) id: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) color: Option<String>,
    pub(crate) icon: Option<String>,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) depth: usize,
}

/// Immutable index over a forest of named nodes
///
/// Nodes live in a flat arena; every node keeps the ordered list of its
/// children, so each matching step only scans the siblings of one parent.
/// Names need not be unique, not even among siblings.
#[derive(Debug, Clone)]
pub struct TreeCatalog {
    nodes: Vec<IndexedNode>,
    roots: Vec<usize>,
    options: CatalogOptions,
    warnings: Vec<CatalogWarning>,
}

impl TreeCatalog {
    /// Build a catalog from an owned forest
    ///
    /// # Errors
    /// Returns `SchemaError` if the delimiter is unusable, a node has an empty
    /// name, or a node id reappears below itself. No partial catalog is kept.
    pub fn build(forest: Vec<CatalogNode>, options: CatalogOptions) -> Result<Self> {
        CatalogOptions::validate_delimiter(options.delimiter)?;

        let mut builder = Builder {
            catalog: Self {
                nodes: Vec::new(),
                roots: Vec::with_capacity(forest.len()),
                options,
                warnings: Vec::new(),
            },
            ancestors: HashSet::new(),
            path: Vec::new(),
        };

        for node in forest {
            let idx = builder.insert(node, None)?;
            builder.catalog.roots.push(idx);
        }

        Ok(builder.catalog)
    }

    /// Parse a JSON array of nodes and build a catalog from it
    ///
    /// # Errors
    /// Returns `SchemaError::Json` for malformed input, otherwise see [`Self::build`].
    pub fn from_json(json: &str, options: CatalogOptions) -> Result<Self> {
        let forest: Vec<CatalogNode> = serde_json::from_str(json)?;
        Self::build(forest, options)
    }

    #[must_use]
    pub const fn options(&self) -> CatalogOptions {
        self.options
    }

    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.options.delimiter
    }

    #[must_use]
    pub const fn num_meta_levels(&self) -> usize {
        self.options.num_meta_levels
    }

    #[must_use]
    pub const fn case_insensitive(&self) -> bool {
        self.options.case_insensitive
    }

    /// Integrity warnings collected during build
    #[must_use]
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Total number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node, counting roots as depth 1
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    /// Apply the catalog's case handling to a piece of text
    ///
    /// Used for both segment matching and duplicate comparison, so that
    /// `Data` and `data` collide whenever matching is case-insensitive.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.case_insensitive {
            Cow::Owned(fold_case(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Root nodes in declaration order
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.roots.iter().map(|&idx| NodeRef { catalog: self, idx })
    }

    /// Candidate nodes following an already matched prefix
    ///
    /// An empty prefix yields the roots. A prefix that does not resolve
    /// yields nothing.
    pub fn children_at<S: AsRef<str>>(&self, prefix: &[S]) -> Vec<NodeRef<'_>> {
        if prefix.is_empty() {
            return self.roots().collect();
        }
        self.resolve(prefix)
            .map(|node| node.children().collect())
            .unwrap_or_default()
    }

    /// Follow a full path of names, taking the first matching sibling at each level
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeRef<'_>> {
        let mut candidates = self.roots.as_slice();
        let mut found = None;
        for segment in path {
            let idx = self.find_child(candidates, segment.as_ref())?;
            candidates = &self.nodes[idx].children;
            found = Some(idx);
        }
        found.map(|idx| NodeRef { catalog: self, idx })
    }

    /// Whether a full path of names exists
    pub fn contains_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.resolve(path).is_some()
    }

    /// Metadata of the node at the end of a path
    pub fn metadata_at<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeMetadata> {
        self.resolve(path).map(|node| node.metadata())
    }

    pub(crate) fn root_ids(&self) -> &[usize] {
        &self.roots
    }

    pub(crate) fn node(&self, idx: usize) -> &IndexedNode {
        &self.nodes[idx]
    }

    pub(crate) fn node_ref(&self, idx: usize) -> NodeRef<'_> {
        NodeRef { catalog: self, idx }
    }

    /// First candidate whose folded name equals the folded segment
    pub(crate) fn find_child(&self, candidates: &[usize], segment: &str) -> Option<usize> {
        let key = self.normalize(segment);
        candidates
            .iter()
            .copied()
            .find(|&idx| self.nodes[idx].key == key.as_ref())
    }
}

/// Walks the source forest depth-first, tracking ids on the current branch
struct Builder {
    catalog: TreeCatalog,
    ancestors: HashSet<String>,
    path: Vec<String>,
}

impl Builder {
    fn insert(&mut self, node: CatalogNode, parent: Option<usize>) -> Result<usize> {
        let CatalogNode {
            name,
            id,
            description,
            color,
            icon,
            children,
        } = node;

        self.path.push(name);
        let name = self.path.last().map(String::as_str).unwrap_or_default();
        let delimiter = self.catalog.options.delimiter;

        if name.is_empty() {
            return Err(SchemaError::EmptyName(self.joined_path()));
        }
        if name.contains(delimiter) {
            let warning = CatalogWarning::DelimiterInName {
                path: self.joined_path(),
                name: name.to_string(),
            };
            self.catalog.warnings.push(warning);
        }

        if let Some(id) = &id
            && !self.ancestors.insert(id.clone())
        {
            return Err(SchemaError::Cycle {
                id: id.clone(),
                path: self.joined_path(),
            });
        }

        let key = self.catalog.normalize(name).into_owned();
        let idx = self.catalog.nodes.len();
        self.catalog.nodes.push(IndexedNode {
            name: name.to_string(),
            key,
            id: id.clone(),
            description,
            color,
            icon,
            parent,
            children: Vec::with_capacity(children.len()),
            depth: self.path.len() - 1,
        });

        for child in children {
            let child_idx = self.insert(child, Some(idx))?;
            self.catalog.nodes[idx].children.push(child_idx);
        }

        if let Some(id) = &id {
            self.ancestors.remove(id);
        }
        self.path.pop();
        Ok(idx)
    }

    fn joined_path(&self) -> String {
        let delimiter = self.catalog.options.delimiter.to_string();
        self.path.join(delimiter.as_str())
    }
}

/// Borrowed view of one catalog node
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    catalog: &'a TreeCatalog,
    idx: usize,
}

impl<'a> NodeRef<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.catalog.nodes[self.idx].name
    }

    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.catalog.nodes[self.idx].id.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&'a str> {
        self.catalog.nodes[self.idx].description.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&'a str> {
        self.catalog.nodes[self.idx].color.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&'a str> {
        self.catalog.nodes[self.idx].icon.as_deref()
    }

    /// Zero-based level in the hierarchy (roots are 0)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.catalog.nodes[self.idx].depth
    }

    #[must_use]
    pub fn num_children(&self) -> usize {
        self.catalog.nodes[self.idx].children.len()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let catalog = self.catalog;
        catalog.nodes[self.idx]
            .children
            .iter()
            .map(move |&idx| NodeRef { catalog, idx })
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.catalog.nodes[self.idx]
            .parent
            .map(|idx| NodeRef { catalog: self.catalog, idx })
    }

    /// Names from the root down to this node
    #[must_use]
    pub fn path(&self) -> Vec<&'a str> {
        let mut names = vec![self.name()];
        let mut current = self.parent();
        while let Some(node) = current {
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        names
    }

    #[must_use]
    pub fn metadata(&self) -> NodeMetadata {
        let node = &self.catalog.nodes[self.idx];
        NodeMetadata {
            id: node.id.clone(),
            description: node.description.clone(),
            color: node.color.clone(),
            icon: node.icon.clone(),
            num_children: node.children.len(),
        }
    }
}
