//! Descriptive metadata for a collection, supplied by persistence.

use serde::{Deserialize, Serialize};

/// Title, icon and link overrides for one collection.
///
/// Looked up by exact name; a missing entry means "use defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptiveInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Link override replacing the generated collection URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Key for alphabetic fallback ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    /// Children are shown elsewhere, never inline
    #[serde(default, skip_serializing_if = "is_false")]
    pub opens_externally: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl DescriptiveInfo {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    pub fn opening_externally(mut self) -> Self {
        self.opens_externally = true;
        self
    }
}
