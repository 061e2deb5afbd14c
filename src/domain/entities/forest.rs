//! CollectionForest entity - arena of collection nodes
//!
//! The forest owns every node of one build. Roots are kept in build order,
//! a case-insensitive index resolves names to ids.

use std::collections::{HashMap, HashSet};
use std::ops::{Index, IndexMut};

use crate::domain::value_objects::{fold, CollectionName};

use super::collection::{CollectionNode, NodeId};

/// All collection trees produced by one build
#[derive(Debug, Clone)]
pub struct CollectionForest {
    delimiter: char,
    nodes: Vec<CollectionNode>,
    roots: Vec<NodeId>,
    index: HashMap<String, NodeId>,
}

impl CollectionForest {
    /// Create an empty forest for the given delimiter
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            nodes: Vec::new(),
            roots: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&CollectionNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut CollectionNode> {
        self.nodes.get_mut(id.0)
    }

    /// Resolve a name (case-insensitive) to its node id
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.index.get(&fold(name)).copied()
    }

    /// Iterate every node id in insertion order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterate every node in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &CollectionNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            forest: self,
            next: self[id].parent,
        }
    }

    /// True if `ancestor` lies on the parent chain of `id`
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Every descendant of `id` in pre-order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out, false);
        out
    }

    /// Descendants of `id` reachable through expanded nodes, in pre-order.
    ///
    /// A node's own flag decides whether its children appear; nodes opening
    /// externally count as leaves.
    pub fn visible_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out, true);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>, gated: bool) {
        let node = &self[id];
        if gated && !node.shows_children() {
            return;
        }
        for &child in &node.children {
            out.push(child);
            self.collect_descendants(child, out, gated);
        }
    }

    /// Sum of item counts over the subtree rooted at `id`
    pub fn total_count(&self, id: NodeId) -> u64 {
        self.descendants(id)
            .into_iter()
            .fold(self[id].item_count(), |acc, d| {
                acc.saturating_add(self[d].item_count())
            })
    }

    /// Names of all expanded nodes
    pub fn expanded_names(&self) -> Vec<CollectionName> {
        self.nodes
            .iter()
            .filter(|n| n.expanded)
            .map(|n| n.name().clone())
            .collect()
    }

    /// Mark the named nodes expanded, ignoring names not in the forest
    pub fn restore_expanded<'a>(&mut self, names: impl IntoIterator<Item = &'a CollectionName>) {
        for name in names {
            if let Some(id) = self.find(name.as_str()) {
                self[id].expanded = true;
            }
        }
    }

    pub(crate) fn insert(&mut self, node: CollectionNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.index.insert(node.name().key().to_string(), id);
        self.nodes.push(node);
        id
    }

    pub(crate) fn push_root(&mut self, id: NodeId) {
        self[id].parent = None;
        self.roots.push(id);
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self[child].parent = Some(parent);
        self[parent].children.push(child);
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.roots
    }

    /// Check that every parent chain terminates and every child points back
    /// at its parent.
    pub fn is_well_formed(&self) -> bool {
        for (id, node) in self.iter() {
            let mut seen = HashSet::new();
            let mut cursor = node.parent;
            while let Some(p) = cursor {
                if p == id || !seen.insert(p) || p.0 >= self.nodes.len() {
                    return false;
                }
                cursor = self[p].parent;
            }
            if node.children.iter().any(|c| self[*c].parent != Some(id)) {
                return false;
            }
        }
        true
    }
}

impl Index<NodeId> for CollectionForest {
    type Output = CollectionNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for CollectionForest {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}

/// Iterator over a node's ancestors
#[derive(Debug)]
pub struct Ancestors<'a> {
    forest: &'a CollectionForest,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.forest[current].parent;
        Some(current)
    }
}
