//! Shelfmark - hierarchical collection catalog builder
//!
//! Shelfmark turns a flat catalog of delimiter-separated collection names
//! with item counts into a forest, orders it with administrator-supplied
//! partial-order rules, and projects the subset a user currently sees
//! given expand/collapse state and an optional focused subtree.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{
    CollectionView, ExpandDepth, RefreshOptions, SharedCollectionView, ViewSettings,
    VisibleCollection,
};
pub use config::Config;
pub use domain::entities::{CollectionForest, CollectionNode, NodeId};
pub use domain::services::{build_forest, CustomSorter, VisibilityProjector};
pub use domain::value_objects::{CollectionName, DescriptiveInfo, OrderingRule, OrderingRuleSet};
pub use error::{ShelfmarkError, ShelfmarkResult};
