//! Property tests for the custom sorter.

use std::collections::BTreeSet;

use proptest::prelude::*;

use shelfmark::domain::services::CustomSorter;
use shelfmark::domain::value_objects::{CollectionName, OrderingRule, OrderingRuleSet};

use super::strategies::collection_name;

fn distinct_names(max: usize) -> impl Strategy<Value = Vec<CollectionName>> {
    proptest::collection::btree_set(collection_name(), 0..max)
        .prop_map(|set| set.into_iter().map(CollectionName::new).collect::<Vec<_>>())
        .prop_shuffle()
}

fn flat_names(max: usize) -> impl Strategy<Value = Vec<CollectionName>> {
    let name = proptest::string::string_regex("[a-f]{1,2}").unwrap();
    proptest::collection::btree_set(name, 0..max)
        .prop_map(|set| set.into_iter().map(CollectionName::new).collect::<Vec<_>>())
        .prop_shuffle()
}

fn listed(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(collection_name(), 1..max)
}

fn rule_set() -> impl Strategy<Value = OrderingRuleSet> {
    let rule = (proptest::option::of(collection_name()), listed(4)).prop_map(|(anchor, names)| {
        let rule = OrderingRule::new(names);
        match anchor {
            Some(anchor) => rule.after(anchor),
            None => rule,
        }
    });
    proptest::collection::vec(rule, 0..4).prop_map(OrderingRuleSet::from)
}

fn sort(rules: &OrderingRuleSet, items: &[CollectionName]) -> Vec<CollectionName> {
    CustomSorter::new(rules, '.').sort(items, |n| n)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sorting never invents, drops or duplicates entries.
    #[test]
    fn property_sort_is_a_permutation(items in distinct_names(16), rules in rule_set()) {
        let names: Vec<&CollectionName> = items.iter().collect();
        let mut order = CustomSorter::new(&rules, '.').permutation(&names);
        order.sort_unstable();
        prop_assert_eq!(order, (0..items.len()).collect::<Vec<_>>());
    }

    /// PROPERTY: without rules the input order is kept.
    #[test]
    fn property_no_rules_is_identity(items in distinct_names(16)) {
        prop_assert_eq!(sort(&OrderingRuleSet::new(), &items), items);
    }

    /// PROPERTY: a list already ordered by a front rule is a fixed point.
    #[test]
    fn property_front_rule_output_is_fixed_point(items in distinct_names(16), names in listed(5)) {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(names));
        let once = sort(&rules, &items);
        let twice = sort(&rules, &once);
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: an anchored rule over nested names is a fixed point, with
    /// subcollections carried along behind their parents.
    #[test]
    fn property_anchored_rule_on_nested_names_is_fixed_point(
        items in distinct_names(16),
        anchor in collection_name(),
        names in listed(4),
    ) {
        let rules = OrderingRuleSet::new().with_rule(OrderingRule::new(names).after(anchor));
        let once = sort(&rules, &items);
        prop_assert_eq!(sort(&rules, &once), once);
    }

    /// PROPERTY: on a flat list, an anchored rule's output is a fixed point
    /// and places the listed names right after the anchor.
    #[test]
    fn property_anchored_rule_on_flat_list(
        items in flat_names(12),
        anchor in "[a-f]{1,2}",
        names in proptest::collection::vec("[a-f]{1,2}", 1..4),
    ) {
        let rule = OrderingRule::new(names.clone()).after(anchor.clone());
        let rules = OrderingRuleSet::new().with_rule(rule);
        let once = sort(&rules, &items);
        prop_assert_eq!(sort(&rules, &once), once.clone());

        let present: Vec<&str> = {
            let mut seen = BTreeSet::new();
            names
                .iter()
                .map(String::as_str)
                .filter(|n| seen.insert(*n) && items.iter().any(|i| i.as_str() == *n))
                .collect()
        };
        let anchor_listed = names.contains(&anchor);
        if let Some(pos) = once.iter().position(|n| n.as_str() == anchor) {
            if !anchor_listed && !present.is_empty() {
                let after: Vec<&str> = once[pos + 1..pos + 1 + present.len()]
                    .iter()
                    .map(CollectionName::as_str)
                    .collect();
                prop_assert_eq!(after, present);
            }
        }
    }
}
