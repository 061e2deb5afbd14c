//! Property tests for visible projections and view mutations.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use shelfmark::application::{CollectionView, RefreshOptions, ViewSettings};
use shelfmark::domain::value_objects::{OrderingRule, OrderingRuleSet};

use super::strategies::{closed_catalog, collection_name};

fn rules() -> impl Strategy<Value = OrderingRuleSet> {
    let names = proptest::collection::vec(collection_name(), 1..4);
    let rule = (proptest::option::of(collection_name()), names).prop_map(|(anchor, names)| {
        let rule = OrderingRule::new(names);
        match anchor {
            Some(anchor) => rule.after(anchor),
            None => rule,
        }
    });
    proptest::collection::vec(rule, 0..3).prop_map(OrderingRuleSet::from)
}

/// A view over `counts` with every `step`-th collection expanded
fn view(counts: BTreeMap<String, u64>, rules: OrderingRuleSet, step: usize) -> CollectionView {
    focused_view(counts, rules, step, None, false)
}

/// Like [`view`], optionally focused on the `focus`-th collection
fn focused_view(
    counts: BTreeMap<String, u64>,
    rules: OrderingRuleSet,
    step: usize,
    focus: Option<prop::sample::Index>,
    display_parent_collections: bool,
) -> CollectionView {
    let names: Vec<String> = counts.keys().cloned().collect();
    let mut view = CollectionView::new(ViewSettings {
        rules,
        display_parent_collections,
        ..ViewSettings::default()
    });
    view.rebuild(counts, RefreshOptions::default());
    for name in names.iter().step_by(step.max(1)) {
        view.show_children(name).unwrap();
    }
    match focus {
        Some(pick) if !names.is_empty() => {
            let top = &names[pick.index(names.len())];
            view.set_focus(Some(top.as_str()), None).unwrap();
        }
        _ => view.recompute(),
    }
    view
}

fn visible(view: &CollectionView) -> Vec<String> {
    view.visible_names().into_iter().map(String::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: projecting twice without mutation yields the same list.
    #[test]
    fn property_projection_is_idempotent(
        counts in closed_catalog(),
        rules in rules(),
        step in 1usize..4,
    ) {
        let mut view = view(counts, rules, step);
        let first = visible(&view);
        view.recompute();
        prop_assert_eq!(visible(&view), first);
    }

    /// PROPERTY: exactly the roots and the children of expanded visible
    /// collections are shown, each once.
    #[test]
    fn property_projection_membership(
        counts in closed_catalog(),
        rules in rules(),
        step in 1usize..4,
    ) {
        let view = view(counts, rules, step);
        let forest = view.forest();

        let shown: Vec<_> = view.visible().to_vec();
        let unique: BTreeSet<_> = shown.iter().map(|id| id.index()).collect();
        prop_assert_eq!(unique.len(), shown.len());

        for (id, node) in forest.iter() {
            let expected = forest.ancestors(id).all(|a| forest[a].shows_children());
            prop_assert_eq!(
                shown.contains(&id),
                expected,
                "visibility of {}",
                node.name()
            );
        }
    }

    /// PROPERTY: showing then hiding a collapsed collection's children
    /// restores the projection, with or without a focused subtree and its
    /// parent collections.
    #[test]
    fn property_show_then_hide_restores_projection(
        counts in closed_catalog(),
        rules in rules(),
        step in 2usize..5,
        focus in proptest::option::of(any::<prop::sample::Index>()),
        display_parents in any::<bool>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut view = focused_view(counts, rules, step, focus, display_parents);
        let collapsed: Vec<String> = view
            .visible_nodes()
            .filter(|n| !n.expanded)
            .map(|n| n.name().to_string())
            .collect();
        prop_assume!(!collapsed.is_empty());
        let name = &collapsed[pick.index(collapsed.len())];

        let before = visible(&view);
        view.show_children(name).unwrap();
        view.hide_children(name).unwrap();
        prop_assert_eq!(visible(&view), before);
    }
}
