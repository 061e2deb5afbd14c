//! Application Layer
//!
//! Use cases that orchestrate the domain services for one user session.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain hierarchy or ordering rules (those are in Domain)
//! - Coordinates the catalog source, info lookup and projection
//!
//! ## Use Cases
//!
//! - `CollectionView` - rebuild, focus, expand/collapse of one view
//! - `SharedCollectionView` - the same behind a coarse lock

mod shared;
mod view;

pub use shared::SharedCollectionView;
pub use view::{CollectionView, ExpandDepth, RefreshOptions, ViewSettings, VisibleCollection};
