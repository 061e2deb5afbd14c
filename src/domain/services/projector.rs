//! Visibility projection service
//!
//! Flattens a forest into the ordered list of collections currently shown
//! to a user. Children appear only below expanded nodes. A focused "top"
//! node restricts the view to its subtree, optionally preceded by its
//! ancestor chain down from a "base" node.

use crate::domain::entities::{CollectionForest, NodeId};
use crate::domain::ports::DescriptiveInfoLookup;
use crate::domain::value_objects::OrderingRuleSet;

use super::sorter::CustomSorter;

/// Computes visible projections of one forest
#[derive(Debug, Clone, Copy)]
pub struct VisibilityProjector<'a> {
    forest: &'a CollectionForest,
    rules: &'a OrderingRuleSet,
    top: Option<NodeId>,
    base: Option<NodeId>,
    display_parents: bool,
}

impl<'a> VisibilityProjector<'a> {
    pub fn new(forest: &'a CollectionForest, rules: &'a OrderingRuleSet) -> Self {
        Self {
            forest,
            rules,
            top: None,
            base: None,
            display_parents: false,
        }
    }

    /// Restrict the view to the subtree of `top`
    pub fn with_top(mut self, top: Option<NodeId>) -> Self {
        self.top = top;
        self
    }

    /// Highest ancestor shown above the top node
    pub fn with_base(mut self, base: Option<NodeId>) -> Self {
        self.base = base;
        self
    }

    /// Show the top node and its ancestors above the focused subtree
    pub fn display_parent_collections(mut self, display: bool) -> Self {
        self.display_parents = display;
        self
    }

    /// Compute the full visible projection
    pub fn project(&self) -> Vec<NodeId> {
        let forest = self.forest;
        let mut list = Vec::new();

        match self.top {
            None => {
                for &root in forest.roots() {
                    list.push(root);
                    list.extend(forest.visible_descendants(root));
                }
            }
            Some(top) => {
                list.push(top);
                list.extend(forest.visible_descendants(top));
                if self.display_parents {
                    let chain = self.ancestor_chain(top);
                    list.splice(0..0, chain);
                }
            }
        }

        self.sort_and_trim(list)
    }

    /// Re-apply the ordering rules to an existing projection.
    ///
    /// When parent display is off the hidden top node is put back in front
    /// for sorting, so rules anchored on it still resolve.
    pub fn resort(&self, visible: &[NodeId]) -> Vec<NodeId> {
        let mut list = Vec::with_capacity(visible.len() + 1);
        if let Some(top) = self.top {
            if !self.display_parents && !visible.contains(&top) {
                list.push(top);
            }
        }
        list.extend_from_slice(visible);
        self.sort_and_trim(list)
    }

    /// True if `id` is the focused top node kept out of the projection
    pub fn is_hidden_top(&self, id: NodeId) -> bool {
        self.top == Some(id) && !self.display_parents
    }

    /// Ancestors of `top`, root-most first, cut at the base node
    fn ancestor_chain(&self, top: NodeId) -> Vec<NodeId> {
        if self.base == Some(top) {
            return Vec::new();
        }
        let mut chain = Vec::new();
        for ancestor in self.forest.ancestors(top) {
            chain.push(ancestor);
            if Some(ancestor) == self.base {
                break;
            }
        }
        chain.reverse();
        chain
    }

    fn sort_and_trim(&self, list: Vec<NodeId>) -> Vec<NodeId> {
        let scope = self.top.map(|top| self.forest[top].name());
        let mut sorted = CustomSorter::new(self.rules, self.forest.delimiter())
            .with_scope(scope)
            .sort_nodes(self.forest, &list);

        if let Some(top) = self.top {
            if !self.display_parents {
                sorted.retain(|id| *id != top);
            }
        }
        sorted
    }
}

/// Attach descriptive info to each visible node by exact name.
///
/// Nodes without an entry are left without info.
pub fn enrich_visible(
    forest: &mut CollectionForest,
    visible: &[NodeId],
    lookup: &dyn DescriptiveInfoLookup,
) {
    for &id in visible {
        let info = lookup.lookup(forest[id].name().as_str());
        forest[id].descriptive_info = info;
    }
}
