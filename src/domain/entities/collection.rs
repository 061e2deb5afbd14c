//! CollectionNode entity
//!
//! A node is one collection of the catalog hierarchy. Nodes live in a
//! [`CollectionForest`](super::CollectionForest) arena; parent and child
//! links are arena ids, ownership runs strictly parent to children.

use serde::Serialize;

use crate::domain::value_objects::{CollectionName, DescriptiveInfo};

/// Sort key reported for nodes without an explicit one
pub const SORT_KEY_SENTINEL: &str = "-";

/// Index of a node inside its forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A collection in the catalog hierarchy
#[derive(Debug, Clone)]
pub struct CollectionNode {
    name: CollectionName,
    level: usize,
    item_count: u64,
    sort_key: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Descendants are part of the visible projection only while set
    pub expanded: bool,
    /// Children are never shown inline
    pub opens_externally: bool,
    /// Metadata injected by lookup during projection
    pub descriptive_info: Option<DescriptiveInfo>,
}

impl CollectionNode {
    pub(crate) fn new(name: CollectionName, level: usize, item_count: u64) -> Self {
        Self {
            name,
            level,
            item_count,
            sort_key: None,
            parent: None,
            children: Vec::new(),
            expanded: false,
            opens_externally: false,
            descriptive_info: None,
        }
    }

    pub fn name(&self) -> &CollectionName {
        &self.name
    }

    /// Depth in the forest (delimiter count of the name)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Items tagged with exactly this collection
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub(crate) fn add_items(&mut self, count: u64) {
        self.item_count = self.item_count.saturating_add(count);
    }

    /// Sort key, or [`SORT_KEY_SENTINEL`] when unset
    pub fn sort_key(&self) -> &str {
        self.sort_key.as_deref().unwrap_or(SORT_KEY_SENTINEL)
    }

    pub fn has_sort_key(&self) -> bool {
        self.sort_key.is_some()
    }

    pub fn set_sort_key(&mut self, key: Option<String>) {
        self.sort_key = key;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when the projection may descend into this node's children
    pub fn shows_children(&self) -> bool {
        self.expanded && !self.opens_externally && self.has_children()
    }

    /// Display title: descriptive override or the raw name
    pub fn display_title(&self) -> &str {
        self.descriptive_info
            .as_ref()
            .and_then(|info| info.title.as_deref())
            .unwrap_or(self.name.as_str())
    }
}
