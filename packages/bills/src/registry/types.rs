//! Types for the element registry system.

use crate::config::{BLOCK_TAG, INLINE_TAG};

/// Classification of element types for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Structural containers (section, paragraph, p), rendered as `div`.
    Block,
    /// Text-level elements (enum, header, external-xref), rendered as `span`.
    Inline,
    /// Elements removed together with their subtree (metadata).
    Skip,
}

impl ElementType {
    /// HTML tag name for this element type, or `None` when skipped.
    #[must_use]
    pub fn output_tag(self) -> Option<&'static str> {
        match self {
            ElementType::Block => Some(BLOCK_TAG),
            ElementType::Inline => Some(INLINE_TAG),
            ElementType::Skip => None,
        }
    }
}

/// Ordered attribute set rebuilt for each element during the rewrite.
///
/// Insertion order is kept; inserting an existing key replaces its value
/// without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreservedAttributes {
    entries: Vec<(String, String)>,
}

impl PreservedAttributes {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Check if an attribute is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Merge another set into this one, in its order.
    pub fn merge(&mut self, other: PreservedAttributes) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for PreservedAttributes {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PreservedAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}
