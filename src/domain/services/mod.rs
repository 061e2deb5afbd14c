//! Domain Services
//!
//! Stateless services holding the hierarchy and ordering logic.
//!
//! - `tree_builder` - flat name→count mapping to forest
//! - `sorter` - custom multi-rule ordering
//! - `projector` - visible projection of a forest
//! - `rule_check` - diagnostics for misconfigured ordering rules

mod projector;
mod rule_check;
mod sorter;
mod tree_builder;

pub use projector::{enrich_visible, VisibilityProjector};
pub use rule_check::{check_rules, RuleDiagnostic, RuleIssue};
pub use sorter::CustomSorter;
pub use tree_builder::{apply_node_settings, build_forest, order_siblings_by_sort_key};
