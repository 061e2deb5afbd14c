//! Property tests for forest building.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use shelfmark::domain::services::build_forest;

use super::strategies::{catalog, closed_catalog, mixed_case_catalog};

/// Longest proper segment prefix of `name` present in `counts`
fn nearest_existing_ancestor<'a>(name: &str, counts: &'a BTreeMap<String, u64>) -> Option<&'a str> {
    let mut prefix = name;
    while let Some((head, _)) = prefix.rsplit_once('.') {
        if let Some((key, _)) = counts.get_key_value(head) {
            return Some(key.as_str());
        }
        prefix = head;
    }
    None
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with every intermediate present, a child's name is its
    /// parent's name plus one segment.
    #[test]
    fn property_children_extend_parent_by_one_segment(counts in closed_catalog()) {
        let forest = build_forest('.', counts.clone());

        for (_, node) in forest.iter() {
            match node.parent() {
                Some(parent) => {
                    let parent = &forest[parent];
                    let segment = node.name().local_segment('.');
                    prop_assert!(!segment.is_empty());
                    prop_assert_eq!(
                        format!("{}.{}", parent.name(), segment),
                        node.name().as_str()
                    );
                    prop_assert_eq!(parent.level() + 1, node.level());
                }
                None => prop_assert_eq!(node.level(), 0),
            }
        }
    }

    /// PROPERTY: every node hangs below its nearest existing ancestor.
    #[test]
    fn property_parent_is_nearest_existing_ancestor(counts in catalog()) {
        let forest = build_forest('.', counts.clone());
        prop_assert!(forest.is_well_formed());

        for (_, node) in forest.iter() {
            let actual = node.parent().map(|p| forest[p].name().as_str());
            let expected = nearest_existing_ancestor(node.name().as_str(), &counts);
            prop_assert_eq!(actual, expected, "parent of {}", node.name());
        }
    }

    /// PROPERTY: the forest holds exactly the input names with their counts.
    #[test]
    fn property_names_and_counts_round_trip(counts in catalog()) {
        let forest = build_forest('.', counts.clone());

        let built: BTreeMap<String, u64> = forest
            .iter()
            .map(|(_, n)| (n.name().to_string(), n.item_count()))
            .collect();
        prop_assert_eq!(built, counts);
    }

    /// PROPERTY: case variants merge into one node and no items are lost.
    #[test]
    fn property_case_variants_merge_without_losing_items(entries in mixed_case_catalog()) {
        let forest = build_forest('.', entries.clone());
        prop_assert!(forest.is_well_formed());

        let distinct: BTreeSet<String> = entries.iter().map(|(n, _)| n.to_lowercase()).collect();
        prop_assert_eq!(forest.len(), distinct.len());

        let input_total: u64 = entries.iter().map(|(_, c)| c).sum();
        let built_total: u64 = forest.iter().map(|(_, n)| n.item_count()).sum();
        prop_assert_eq!(built_total, input_total);

        for (_, node) in forest.iter() {
            if let Some(parent) = node.parent() {
                prop_assert!(node.name().is_descendant_of(forest[parent].name(), '.'));
            }
        }
    }
}
