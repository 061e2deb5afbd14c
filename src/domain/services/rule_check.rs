//! Ordering rule diagnostics
//!
//! Misconfigured rules never fail a projection, they silently degrade. This
//! service reports those degradations up front so administrators can fix
//! their configuration.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::CollectionForest;
use crate::domain::value_objects::{OrderingRule, OrderingRuleSet};

/// What is wrong with a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleIssue {
    /// The rule lists no collections
    Empty,
    /// The anchor does not name a collection; listed names go to the front
    UnknownAnchor { anchor: String },
    /// A listed name does not exist in the catalog
    UnknownName { name: String },
    /// A name is listed more than once; later entries are ignored
    DuplicateName { name: String },
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "lists no collections"),
            Self::UnknownAnchor { anchor } => {
                write!(f, "anchor '{anchor}' is not a known collection")
            }
            Self::UnknownName { name } => write!(f, "'{name}' is not a known collection"),
            Self::DuplicateName { name } => write!(f, "'{name}' is listed more than once"),
        }
    }
}

/// An issue found in the rule at `rule_index` (0-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDiagnostic {
    pub rule_index: usize,
    #[serde(flatten)]
    pub issue: RuleIssue,
}

/// Check every rule against the forest
pub fn check_rules(forest: &CollectionForest, rules: &OrderingRuleSet) -> Vec<RuleDiagnostic> {
    rules
        .iter()
        .enumerate()
        .flat_map(|(rule_index, rule)| {
            check_rule(forest, rule)
                .into_iter()
                .map(move |issue| RuleDiagnostic { rule_index, issue })
        })
        .collect()
}

fn check_rule(forest: &CollectionForest, rule: &OrderingRule) -> Vec<RuleIssue> {
    let mut issues = Vec::new();
    if rule.is_noop() {
        issues.push(RuleIssue::Empty);
    }

    if let Some(anchor) = &rule.anchor {
        if forest.find(anchor.as_str()).is_none() {
            issues.push(RuleIssue::UnknownAnchor {
                anchor: anchor.to_string(),
            });
        }
    }

    for (i, name) in rule.names.iter().enumerate() {
        if rule.names[..i].contains(name) {
            issues.push(RuleIssue::DuplicateName {
                name: name.to_string(),
            });
        } else if forest.find(name.as_str()).is_none() {
            issues.push(RuleIssue::UnknownName {
                name: name.to_string(),
            });
        }
    }

    issues
}
