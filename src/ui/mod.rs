//! Terminal and machine-readable output

pub mod json;
pub mod render;
pub mod theme;

pub use render::{render_check, render_tree};
