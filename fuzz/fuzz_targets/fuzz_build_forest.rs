#![no_main]

use libfuzzer_sys::fuzz_target;
use shelfmark::domain::services::{build_forest, VisibilityProjector};
use shelfmark::OrderingRuleSet;

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    // First byte picks the delimiter; each line is one collection name
    let delimiter = char::from(first);
    let mut forest = build_forest(delimiter, text.lines().map(|name| (name, 1u64)));
    assert!(forest.is_well_formed());

    let ids: Vec<_> = forest.ids().collect();
    for id in ids {
        forest[id].expanded = true;
    }
    let visible = VisibilityProjector::new(&forest, &OrderingRuleSet::new()).project();
    assert_eq!(visible.len(), forest.len());
});
