//! CollectionName value object - hierarchical, delimiter-joined names
//!
//! Names are stored verbatim for display. Identity is case-insensitive, so a
//! folded comparison key is computed once at construction and used for every
//! equality, prefix and lookup test.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default segment delimiter
pub const DEFAULT_DELIMITER: char = '.';

/// A delimiter-joined collection name such as `history.europe.germany`
#[derive(Debug, Clone)]
pub struct CollectionName {
    raw: String,
    key: String,
}

impl CollectionName {
    /// Create a name, computing its folded comparison key
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = fold(&raw);
        Self { raw, key }
    }

    /// The name as supplied by the data source
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded comparison key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of delimiter occurrences.
    ///
    /// Empty names and names made only of delimiters cannot be split
    /// meaningfully and report level 0.
    pub fn level(&self, delimiter: char) -> usize {
        if self.raw.chars().all(|c| c == delimiter) {
            return 0;
        }
        self.raw.matches(delimiter).count()
    }

    /// Last segment of the name (the whole name for roots)
    pub fn local_segment(&self, delimiter: char) -> &str {
        match self.raw.rfind(delimiter) {
            Some(idx) => &self.raw[idx + delimiter.len_utf8()..],
            None => &self.raw,
        }
    }

    /// True if `self` is a strict descendant of `ancestor`, i.e. its key
    /// starts with `ancestor.key + delimiter`.
    pub fn is_descendant_of(&self, ancestor: &CollectionName, delimiter: char) -> bool {
        is_descendant_key(&self.key, &ancestor.key, delimiter)
    }

    /// True if `self` equals `other` or descends from it
    pub fn is_within(&self, other: &CollectionName, delimiter: char) -> bool {
        self == other || self.is_descendant_of(other, delimiter)
    }

    /// Case-insensitive comparison against a plain string
    pub fn matches(&self, other: &str) -> bool {
        self.key == fold(other)
    }
}

/// Fold a name into its comparison key
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Prefix-plus-delimiter test on already folded keys
pub fn is_descendant_key(key: &str, ancestor_key: &str, delimiter: char) -> bool {
    key.strip_prefix(ancestor_key)
        .is_some_and(|rest| rest.starts_with(delimiter))
}

impl PartialEq for CollectionName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CollectionName {}

impl Hash for CollectionName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for CollectionName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CollectionName {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl Serialize for CollectionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for CollectionName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
