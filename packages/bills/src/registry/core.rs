//! Element registry for classifying tag names and finding handlers.

use std::collections::{HashMap, HashSet};

use super::handler::ElementHandler;
use super::types::ElementType;
use crate::xml::Element;

/// Registry mapping element names to classifications and handlers.
///
/// Classification is total: a tag marked skip is `Skip`, a tag registered as
/// a block is `Block`, and every other tag is `Inline`.
pub struct ElementRegistry {
    handlers: HashMap<String, Box<dyn ElementHandler>>,
    block_tags: HashSet<String>,
    display_block_tags: HashSet<String>,
    skip_tags: HashSet<String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            block_tags: HashSet::new(),
            display_block_tags: HashSet::new(),
            skip_tags: HashSet::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.handlers.insert(tag_name.into(), Box::new(handler));
    }

    /// Mark tags as block containers.
    pub fn blocks(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.block_tags.insert(tag.into());
        }
    }

    /// Mark tags that are always wrapped in their own paragraph container.
    pub fn display_blocks(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.display_block_tags.insert(tag.into());
        }
    }

    /// Mark tags as skip (removed with their subtree).
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.skip_tags.insert(tag.into());
        }
    }

    /// Classify an original tag name.
    #[must_use]
    pub fn classify(&self, tag_name: &str) -> ElementType {
        if self.skip_tags.contains(tag_name) {
            ElementType::Skip
        } else if self.block_tags.contains(tag_name) {
            ElementType::Block
        } else {
            ElementType::Inline
        }
    }

    /// Get the handler for an element, keyed by its original name.
    ///
    /// Returns `None` if the element should be skipped or has no handler.
    #[must_use]
    pub fn get_handler(&self, element: &Element) -> Option<&dyn ElementHandler> {
        let tag_name = element.original_name();

        if self.skip_tags.contains(tag_name) {
            return None;
        }

        self.handlers
            .get(tag_name)
            .filter(|h| h.can_handle(element))
            .map(|h| h.as_ref())
    }

    /// Check if a tag is always wrapped in its own paragraph container.
    #[must_use]
    pub fn is_display_block(&self, tag_name: &str) -> bool {
        self.display_block_tags.contains(tag_name)
    }

    /// Check if a tag should be skipped.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }

    /// Return set of all block tag names.
    #[must_use]
    pub fn block_tags(&self) -> HashSet<&str> {
        self.block_tags.iter().map(|s| s.as_str()).collect()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
