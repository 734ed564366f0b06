//! Containerizer that wraps sibling runs in synthetic paragraph elements.

use super::rules::{DisplayBlockRule, EnumGroupRule, GroupingRule, SectionTextRule};
use crate::config::PARAGRAPH_TAG;
use crate::registry::ElementRegistry;
use crate::xml::{Document, Element};

/// Engine that applies grouping rules to every element of a document.
///
/// Elements are visited in document order from a snapshot taken before any
/// wrapping, so synthetic containers are never visited themselves. For each
/// element the first matching rule wins. A node already moved into a
/// container by an earlier group no longer has its old parent, which is what
/// keeps it from being wrapped a second time.
pub struct Containerizer {
    rules: Vec<Box<dyn GroupingRule>>,
}

impl Containerizer {
    /// Create a containerizer with the given rules, in priority order.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn GroupingRule>>) -> Self {
        Self { rules }
    }

    /// Create a containerizer with the bill rules: enum groups, section
    /// text, display blocks.
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(vec![
            Box::new(EnumGroupRule),
            Box::new(SectionTextRule),
            Box::new(DisplayBlockRule),
        ])
    }

    /// Wrap matching runs in new `p` elements.
    ///
    /// # Returns
    /// Number of containers inserted
    pub fn run(&self, document: &mut Document, registry: &ElementRegistry) -> usize {
        let mut wrapped = 0;

        for id in document.element_ids() {
            let Some(node) = document.node(id) else {
                continue;
            };
            let Some((rule, group)) = self
                .rules
                .iter()
                .find_map(|rule| rule.group(node, registry).map(|group| (rule.name(), group)))
            else {
                continue;
            };

            if document
                .wrap_in_container(group.first, group.last, Element::new(PARAGRAPH_TAG))
                .is_some()
            {
                tracing::trace!(rule, "Wrapped sibling run in paragraph container");
                wrapped += 1;
            }
        }

        tracing::debug!(containers = wrapped, "Containerized document");
        wrapped
    }
}

impl Default for Containerizer {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
