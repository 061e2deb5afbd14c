//! Tree building service
//!
//! Turns a flat name→count mapping into a [`CollectionForest`], inferring
//! parent/child edges from name structure alone.
//!
//! The build is a single pass over the names in lexicographic order with a
//! cursor on the last processed node. This relies on lexicographic order of
//! delimiter-joined names matching pre-order of the hierarchy, which holds
//! when the delimiter sorts before every character that starts a segment.
//! A segment starting with a character that sorts before the delimiter
//! (e.g. `-` with `.`) can break nesting; the precondition is not checked.

use tracing::{debug, info};

use crate::domain::entities::{CollectionForest, CollectionNode, NodeId};
use crate::domain::ports::DescriptiveInfoLookup;
use crate::domain::value_objects::{fold, is_descendant_key, CollectionName};

/// Build a forest from collection names and their item counts.
///
/// A node is attached under the nearest processed node whose name is a
/// delimiter-prefix of its own, not merely under the first node with a
/// lower level. The two agree when every parent name is present. When an
/// intermediate name is missing they differ: with `{a, b.c}` the node
/// `b.c` becomes a root instead of a child of `a`, so a child's name always
/// extends its parent's.
///
/// Names equal up to case merge into the first one in byte order, with
/// their counts summed.
pub fn build_forest<I, S>(delimiter: char, counts: I) -> CollectionForest
where
    I: IntoIterator<Item = (S, u64)>,
    S: Into<String>,
{
    let mut entries: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(name, count)| (name.into(), count))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut forest = CollectionForest::new(delimiter);
    let mut cursor: Option<NodeId> = None;
    let mut merged = 0usize;

    for (raw, count) in entries {
        if let Some(existing) = forest.find(&raw) {
            debug!(name = %raw, existing = %forest[existing].name(), "merging case-insensitive duplicate");
            forest[existing].add_items(count);
            merged += 1;
            continue;
        }

        let name = CollectionName::new(raw);
        let level = name.level(delimiter);
        let key = name.key().to_string();
        let id = forest.insert(CollectionNode::new(name, level, count));

        if level == 0 {
            forest.push_root(id);
        } else {
            match find_parent(&forest, cursor, &key, delimiter) {
                Some(parent) => forest.attach(parent, id),
                None => {
                    debug!(name = %forest[id].name(), "no ancestor found, placing as root");
                    forest.push_root(id);
                }
            }
        }
        cursor = Some(id);
    }

    debug_assert!(forest.is_well_formed(), "tree builder produced a cycle");
    info!(
        nodes = forest.len(),
        roots = forest.roots().len(),
        merged,
        "built collection forest"
    );
    forest
}

/// Walk up from the cursor to the nearest node whose name is a
/// delimiter-prefix of `key`. Such a node always has a lower level.
fn find_parent(
    forest: &CollectionForest,
    cursor: Option<NodeId>,
    key: &str,
    delimiter: char,
) -> Option<NodeId> {
    let mut candidate = cursor;
    while let Some(id) = candidate {
        if is_descendant_key(key, forest[id].name().key(), delimiter) {
            return Some(id);
        }
        candidate = forest[id].parent();
    }
    None
}

/// Copy sort keys and the opens-externally flag from descriptive info onto
/// every node of the forest.
pub fn apply_node_settings(forest: &mut CollectionForest, lookup: &dyn DescriptiveInfoLookup) {
    let ids: Vec<NodeId> = forest.ids().collect();
    for id in ids {
        let Some(info) = lookup.lookup(forest[id].name().as_str()) else {
            continue;
        };
        let node = &mut forest[id];
        if info.sort_key.is_some() {
            node.set_sort_key(info.sort_key);
        }
        node.opens_externally |= info.opens_externally;
    }
}

/// Stable re-ordering of every sibling list by sort key.
///
/// Nodes without a key sort by their local segment. Comparison is
/// case-insensitive.
pub fn order_siblings_by_sort_key(forest: &mut CollectionForest) {
    let roots = sorted_by_key(forest, forest.roots());
    *forest.roots_mut() = roots;

    let ids: Vec<NodeId> = forest.ids().collect();
    for id in ids {
        if !forest[id].has_children() {
            continue;
        }
        let children = sorted_by_key(forest, forest[id].children());
        forest[id].children = children;
    }
}

fn sorted_by_key(forest: &CollectionForest, ids: &[NodeId]) -> Vec<NodeId> {
    let delimiter = forest.delimiter();
    let mut sorted = ids.to_vec();
    sorted.sort_by_cached_key(|id| {
        let node = &forest[*id];
        if node.has_sort_key() {
            fold(node.sort_key())
        } else {
            fold(node.name().local_segment(delimiter))
        }
    });
    sorted
}
