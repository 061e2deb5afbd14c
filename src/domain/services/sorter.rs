//! Custom multi-rule sorting service
//!
//! Applies an [`OrderingRuleSet`] to a list of collections. Each rule moves
//! its listed collections, in the listed order, right after the anchor
//! collection and pulls their unlisted descendants along behind the nearest
//! ancestor. Everything else keeps its relative order. Rules run in
//! sequence, each on the previous rule's output.
//!
//! The sorter is pure: it never mutates its input and returns a new list.
//! Misconfigured rules degrade (missing anchor inserts at the front,
//! duplicate names keep their first occurrence) instead of failing.

use tracing::debug;

use crate::domain::entities::{CollectionForest, NodeId};
use crate::domain::value_objects::{CollectionName, OrderingRule, OrderingRuleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Sorted,
    Subcollection,
    Rest,
}

/// Sorter configured with a rule set, delimiter and optional scope
#[derive(Debug, Clone, Copy)]
pub struct CustomSorter<'a> {
    rules: &'a OrderingRuleSet,
    delimiter: char,
    scope: Option<&'a CollectionName>,
}

impl<'a> CustomSorter<'a> {
    pub fn new(rules: &'a OrderingRuleSet, delimiter: char) -> Self {
        Self {
            rules,
            delimiter,
            scope: None,
        }
    }

    /// Restrict rule application to a focused subtree.
    ///
    /// Rules none of whose listed names fall inside the scope are skipped.
    pub fn with_scope(mut self, scope: Option<&'a CollectionName>) -> Self {
        self.scope = scope;
        self
    }

    /// Sort node ids of `forest`
    pub fn sort_nodes(&self, forest: &CollectionForest, ids: &[NodeId]) -> Vec<NodeId> {
        self.sort(ids, |id| forest[*id].name())
    }

    /// Sort arbitrary items, reading each item's collection name through
    /// `name_of`.
    pub fn sort<'n, T, F>(&self, items: &'n [T], name_of: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&'n T) -> &'n CollectionName,
    {
        let names: Vec<&CollectionName> = items.iter().map(name_of).collect();
        self.permutation(&names)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    /// Order of `names` after applying every rule, as indices into `names`
    pub fn permutation(&self, names: &[&CollectionName]) -> Vec<usize> {
        let initial: Vec<usize> = (0..names.len()).collect();
        self.rules
            .iter()
            .fold(initial, |order, rule| self.apply_rule(order, rule, names))
    }

    fn in_scope(&self, rule: &OrderingRule) -> bool {
        match self.scope {
            None => true,
            Some(scope) => rule
                .names
                .iter()
                .any(|name| name.is_within(scope, self.delimiter)),
        }
    }

    fn apply_rule(
        &self,
        order: Vec<usize>,
        rule: &OrderingRule,
        names: &[&CollectionName],
    ) -> Vec<usize> {
        if rule.is_noop() {
            return order;
        }
        if !self.in_scope(rule) {
            debug!(anchor = ?rule.anchor.as_ref().map(|a| a.as_str()), "rule outside focused scope, skipped");
            return order;
        }

        let d = self.delimiter;
        let ordered = rule.distinct_names();

        // Partition: exact matches fill their slot once, descendants of a
        // listed name become subcollections, everything else stays.
        let mut slots: Vec<Option<usize>> = vec![None; ordered.len()];
        let mut buckets = Vec::with_capacity(order.len());
        for &i in &order {
            let name = names[i];
            if let Some(pos) = ordered.iter().position(|n| *n == name) {
                if slots[pos].is_none() {
                    slots[pos] = Some(i);
                    buckets.push(Bucket::Sorted);
                    continue;
                }
            }
            if ordered.iter().any(|n| name.is_descendant_of(n, d)) {
                buckets.push(Bucket::Subcollection);
            } else {
                buckets.push(Bucket::Rest);
            }
        }

        // A subcollection is only repositioned when one of its ancestors is
        // part of the working list; otherwise it keeps its place in rest.
        let anchored: Vec<usize> = order
            .iter()
            .zip(&buckets)
            .filter(|(_, b)| **b != Bucket::Subcollection)
            .map(|(i, _)| *i)
            .collect();

        let mut rest = Vec::with_capacity(order.len());
        let mut subcollections = Vec::new();
        for (&i, bucket) in order.iter().zip(&buckets) {
            match bucket {
                Bucket::Sorted => {}
                Bucket::Subcollection
                    if anchored.iter().any(|&a| names[i].is_descendant_of(names[a], d)) =>
                {
                    subcollections.push(i)
                }
                Bucket::Subcollection | Bucket::Rest => rest.push(i),
            }
        }

        let index = self.insertion_index(&rest, rule, names);
        let mut working = rest;
        working.splice(index..index, slots.into_iter().flatten());

        for sub in subcollections.into_iter().rev() {
            match working
                .iter()
                .rposition(|&w| names[sub].is_descendant_of(names[w], d))
            {
                Some(pos) => working.insert(pos + 1, sub),
                None => working.push(sub),
            }
        }

        working
    }

    /// Index just past the contiguous run of anchor matches in `rest`.
    ///
    /// A match is the anchor itself or a descendant of it no deeper than the
    /// shallowest listed name. Without an anchor, or when the anchor is not
    /// found, this is the front of the list.
    fn insertion_index(&self, rest: &[usize], rule: &OrderingRule, names: &[&CollectionName]) -> usize {
        let Some(anchor) = &rule.anchor else {
            return 0;
        };

        let d = self.delimiter;
        let max_level = rule.min_level(d);
        let mut index = None;
        for (pos, &i) in rest.iter().enumerate() {
            let name = names[i];
            let hit = name == anchor || (name.is_descendant_of(anchor, d) && name.level(d) <= max_level);
            if hit {
                index = Some(pos + 1);
            } else if index.is_some() {
                break;
            }
        }

        index.unwrap_or_else(|| {
            debug!(anchor = %anchor, "anchor not found, inserting at front");
            0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<CollectionName> {
        list.iter().map(|n| CollectionName::new(*n)).collect()
    }

    fn sorted(rules: &OrderingRuleSet, list: &[&str]) -> Vec<String> {
        sorted_in_scope(rules, None, list)
    }

    fn sorted_in_scope(rules: &OrderingRuleSet, scope: Option<&str>, list: &[&str]) -> Vec<String> {
        let scope = scope.map(CollectionName::new);
        CustomSorter::new(rules, '.')
            .with_scope(scope.as_ref())
            .sort(&names(list), |n| n)
            .iter()
            .map(|n| n.as_str().to_string())
            .collect()
    }

    #[test]
    fn rule_without_anchor_moves_to_front() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["z", "a"]));
        assert_eq!(sorted(&rules, &["a", "z"]), vec!["z", "a"]);
    }

    #[test]
    fn already_ordered_list_is_unchanged() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["b"]).after("a"));
        assert_eq!(sorted(&rules, &["a", "b", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn listed_names_follow_anchor() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["d", "b"]).after("a"));
        assert_eq!(
            sorted(&rules, &["a", "b", "c", "d", "e"]),
            vec!["a", "d", "b", "c", "e"]
        );
    }

    #[test]
    fn missing_anchor_inserts_at_front() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["c"]).after("nope"));
        assert_eq!(sorted(&rules, &["a", "b", "c"]), vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_rule_is_noop() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(Vec::<&str>::new()));
        assert_eq!(sorted(&rules, &["b", "a"]), vec!["b", "a"]);
    }

    #[test]
    fn subcollections_follow_their_listed_ancestor() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["z", "a"]));
        assert_eq!(
            sorted(&rules, &["a", "a.b", "a.b.x", "a.c", "m", "z", "z.q"]),
            vec!["z", "z.q", "a", "a.b", "a.b.x", "a.c", "m"]
        );
    }

    #[test]
    fn exact_match_wins_over_subcollection() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["a.c", "a"]));
        assert_eq!(
            sorted(&rules, &["a", "a.b", "a.c", "b"]),
            vec!["a.c", "a", "a.b", "b"]
        );
    }

    #[test]
    fn duplicate_listed_names_keep_first() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["b", "a", "B"]));
        assert_eq!(sorted(&rules, &["a", "b", "c"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["Z"]));
        assert_eq!(sorted(&rules, &["a", "z"]), vec!["z", "a"]);
    }

    #[test]
    fn orphaned_subcollection_keeps_position() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["x", "a"]));
        // "a" is absent, so "a.b" has no ancestor to follow
        assert_eq!(sorted(&rules, &["m", "a.b", "x"]), vec!["x", "m", "a.b"]);
    }

    #[test]
    fn anchor_run_extends_over_shallow_descendants() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["a.y"]).after("a"));
        assert_eq!(
            sorted(&rules, &["a", "a.x", "a.y", "b"]),
            vec!["a", "a.x", "a.y", "b"]
        );
        assert_eq!(
            sorted(&rules, &["a", "a.y", "a.x", "b"]),
            vec!["a", "a.x", "a.y", "b"]
        );
    }

    #[test]
    fn anchor_run_stops_at_first_gap() {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["c"]).after("a"));
        // the second "a"-run is never reached
        assert_eq!(
            sorted(&rules, &["a", "b", "c", "a.z"]),
            vec!["a", "c", "b", "a.z"]
        );
    }

    #[test]
    fn rules_apply_in_sequence() {
        let rules = OrderingRuleSet::new()
            .with_rule(OrderingRule::new(["c"]))
            .with_rule(OrderingRule::new(["b"]).after("c"));
        assert_eq!(sorted(&rules, &["a", "b", "c"]), vec!["c", "b", "a"]);
    }

    #[test]
    fn scope_skips_rules_outside_focus() {
        let rules = OrderingRuleSet::new()
            .with_rule(OrderingRule::new(["z"]))
            .with_rule(OrderingRule::new(["a.c", "a.b"]).after("a"));
        assert_eq!(
            sorted_in_scope(&rules, Some("a"), &["a", "a.b", "a.c", "z"]),
            vec!["a", "a.c", "a.b", "z"]
        );
        assert_eq!(
            sorted_in_scope(&rules, None, &["a", "a.b", "a.c", "z"]),
            vec!["z", "a", "a.c", "a.b"]
        );
    }

    #[test]
    fn sort_nodes_reads_names_from_forest() {
        use crate::domain::services::build_forest;

        let forest = build_forest('.', [("a", 1), ("z", 1)]);
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(["z"]));
        let ids = CustomSorter::new(&rules, '.').sort_nodes(&forest, forest.roots());
        assert_eq!(ids, vec![forest.find("z").unwrap(), forest.find("a").unwrap()]);
    }
}
