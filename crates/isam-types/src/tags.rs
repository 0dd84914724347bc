//! Tag sets produced by index decoders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tag keys emitted by the decoders.
pub mod keys {
    /// Card name or `rack/shelf/slot` position.
    pub const CARD: &str = "card";
    /// Table sub-index or resolved interface index.
    pub const INDEX: &str = "index";
    /// `rack/shelf/slot/port` interface address.
    pub const INTERFACE: &str = "interface";
    /// VLAN id split off a composite index.
    pub const VLAN: &str = "vlan";
}

/// A single tag value.
///
/// Integers and text are kept apart so that a numeric `index` tag and a
/// verbatim textual one serialize the way the metric store expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Int(i64),
    Text(String),
}

impl TagValue {
    /// Returns the integer value, if this is an integer tag.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(v) => Some(*v),
            TagValue::Text(_) => None,
        }
    }

    /// Returns the text value, if this is a text tag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Int(_) => None,
            TagValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(v) => write!(f, "{}", v),
            TagValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TagValue {
    fn from(v: i64) -> Self {
        TagValue::Int(v)
    }
}

impl From<u32> for TagValue {
    fn from(v: u32) -> Self {
        TagValue::Int(i64::from(v))
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

/// An ordered tag set, merged by the caller into a metric's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, TagValue>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a tag, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Option<TagValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TagValue)> {
        self.0.iter()
    }

    /// Merges `other` into `self`; keys in `other` take precedence.
    pub fn merge(&mut self, other: Tags) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<TagValue>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Tags {
    type Item = (String, TagValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
