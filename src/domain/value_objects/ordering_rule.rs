//! Ordering rules - administrator-supplied partial orderings of collections
//!
//! A rule places its listed collections, in the listed order, immediately
//! after an anchor collection (or at the front when no anchor is given).
//! Rules are applied in sequence by the custom sorter.

use serde::{Deserialize, Serialize};

use super::CollectionName;

/// One partial-order rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingRule {
    /// Collection after which `names` are inserted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<CollectionName>,

    /// Collections to place, in this order
    #[serde(default)]
    pub names: Vec<CollectionName>,
}

impl OrderingRule {
    /// Rule without an anchor (listed collections go to the front)
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<CollectionName>,
    {
        Self {
            anchor: None,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the anchor collection
    pub fn after(mut self, anchor: impl Into<CollectionName>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Rules without names do nothing
    pub fn is_noop(&self) -> bool {
        self.names.is_empty()
    }

    /// Listed names with later duplicates removed
    pub fn distinct_names(&self) -> Vec<&CollectionName> {
        let mut seen: Vec<&CollectionName> = Vec::with_capacity(self.names.len());
        for name in &self.names {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Level of the shallowest listed name
    pub fn min_level(&self, delimiter: char) -> usize {
        self.names
            .iter()
            .map(|n| n.level(delimiter))
            .min()
            .unwrap_or(0)
    }
}

/// Ordered sequence of rules, applied first to last
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderingRuleSet {
    rules: Vec<OrderingRule>,
}

impl OrderingRuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    pub fn push(&mut self, rule: OrderingRule) {
        self.rules.push(rule);
    }

    /// Builder-style append
    pub fn with_rule(mut self, rule: OrderingRule) -> Self {
        self.push(rule);
        self
    }

    /// Iterate rules in application order
    pub fn iter(&self) -> impl Iterator<Item = &OrderingRule> {
        self.rules.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl From<Vec<OrderingRule>> for OrderingRuleSet {
    fn from(rules: Vec<OrderingRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<OrderingRule> for OrderingRuleSet {
    fn from_iter<T: IntoIterator<Item = OrderingRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_names_keeps_first_occurrence() {
        let rule = OrderingRule::new(["b", "a", "B", "c"]);
        let names: Vec<&str> = rule.distinct_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn min_level_is_shallowest_entry() {
        let rule = OrderingRule::new(["a.b.c", "a.d", "x.y.z"]);
        assert_eq!(rule.min_level('.'), 1);
        assert_eq!(OrderingRule::new(Vec::<&str>::new()).min_level('.'), 0);
    }

    #[test]
    fn empty_rule_is_noop() {
        assert!(OrderingRule::new(Vec::<&str>::new()).after("a").is_noop());
        assert!(!OrderingRule::new(["a"]).is_noop());
    }

    #[test]
    fn rule_set_deserializes_from_toml_tables() {
        #[derive(Deserialize)]
        struct Wrapper {
            ordering: OrderingRuleSet,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
            [[ordering]]
            names = ["z", "a"]

            [[ordering]]
            anchor = "a"
            names = ["b"]
            "#,
        )
        .unwrap();

        assert_eq!(parsed.ordering.len(), 2);
        let rules: Vec<_> = parsed.ordering.iter().collect();
        assert!(rules[0].anchor.is_none());
        assert_eq!(rules[1].anchor.as_ref().unwrap().as_str(), "a");
    }
}
