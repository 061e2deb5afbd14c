//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod collection_name;
mod descriptive_info;
mod ordering_rule;

pub use collection_name::{fold, is_descendant_key, CollectionName, DEFAULT_DELIMITER};
pub use descriptive_info::DescriptiveInfo;
pub use ordering_rule::{OrderingRule, OrderingRuleSet};
