//! Shared generators.

use std::collections::BTreeMap;

use proptest::prelude::*;

/// A dotted name of 1..=3 lowercase segments.
///
/// The small alphabet makes shared prefixes (and so nesting) common.
pub fn collection_name() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-c]{1,2}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("."))
}

/// A catalog of lowercase names with counts
pub fn catalog() -> impl Strategy<Value = BTreeMap<String, u64>> {
    proptest::collection::btree_map(collection_name(), 0u64..1_000, 0..24)
}

/// A catalog where every proper prefix of a name is itself a name
pub fn closed_catalog() -> impl Strategy<Value = BTreeMap<String, u64>> {
    catalog().prop_map(|counts| {
        let mut closed = counts.clone();
        for name in counts.keys() {
            let mut prefix = String::new();
            for segment in name.split('.') {
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                closed.entry(prefix.clone()).or_insert(1);
            }
        }
        closed
    })
}

/// Names whose case may differ between entries
pub fn mixed_case_catalog() -> impl Strategy<Value = Vec<(String, u64)>> {
    let segment = proptest::string::string_regex("[aAbB]{1,2}").unwrap();
    let name = proptest::collection::vec(segment, 1..=2).prop_map(|s| s.join("."));
    proptest::collection::vec((name, 0u64..100), 0..16)
}
