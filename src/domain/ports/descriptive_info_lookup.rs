//! DescriptiveInfoLookup port - per-collection metadata from persistence

use std::collections::HashMap;

use crate::domain::value_objects::DescriptiveInfo;

/// Outbound lookup of descriptive info by exact collection name.
///
/// `None` is the normal answer for collections without overrides.
pub trait DescriptiveInfoLookup {
    fn lookup(&self, name: &str) -> Option<DescriptiveInfo>;
}

impl DescriptiveInfoLookup for HashMap<String, DescriptiveInfo> {
    fn lookup(&self, name: &str) -> Option<DescriptiveInfo> {
        self.get(name).cloned()
    }
}

impl<T: DescriptiveInfoLookup + ?Sized> DescriptiveInfoLookup for &T {
    fn lookup(&self, name: &str) -> Option<DescriptiveInfo> {
        (**self).lookup(name)
    }
}
