//! Domain Layer
//!
//! The core of Shelfmark - pure hierarchy and ordering logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Collection nodes and the forest arena that owns them
//! - `value_objects/` - Names, ordering rules, descriptive info
//! - `services/` - Tree builder, custom sorter, visibility projector
//! - `ports/` - Interface definitions for the catalog source and info lookup
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or an index
//! 2. **Pure Functions** - Sorting and projection return new lists
//! 3. **Ports & Adapters** - All collaborators go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
