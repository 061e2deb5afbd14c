//! Repository Implementations
//!
//! Concrete implementations of domain lookup ports.

mod descriptive_info;

pub use descriptive_info::ConfigDescriptiveInfoRepository;
