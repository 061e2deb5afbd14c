//! Domain Entities
//!
//! Core domain objects with identity.

mod collection;
mod forest;

pub use collection::{CollectionNode, NodeId, SORT_KEY_SENTINEL};
pub use forest::{Ancestors, CollectionForest};
