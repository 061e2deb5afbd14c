//! Property tests for Shelfmark.
//!
//! Properties use randomized catalogs and rule sets to protect the
//! structural guarantees of building, sorting and projecting.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/strategies.rs"]
mod strategies;

#[path = "properties/tree_builder.rs"]
mod tree_builder;

#[path = "properties/sorter.rs"]
mod sorter;

#[path = "properties/projection.rs"]
mod projection;
