//! Rewrite engine that turns bill XML elements into `div`/`span` elements.

use super::counter::BlockCounter;
use crate::config::{ConvertOptions, BLOCK_ID_ATTR, CLASS_ATTR, PARAGRAPH_TAG};
use crate::error::{ConvertError, Result};
use crate::registry::{ElementRegistry, PreservedAttributes};
use crate::xml::Document;

/// Counts collected during one rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Elements renamed to `div` or `span`.
    pub elements: usize,
    /// Block ids assigned.
    pub blocks: usize,
    /// Skipped subtrees removed.
    pub removed: usize,
}

/// Engine that rewrites every element of a document in a single pass.
///
/// For each element, in document order:
///
/// 1. skipped elements (metadata) are detached with their subtree
/// 2. preserved attributes start as `class` = original name
/// 3. the element's handler, if any, adds derived attributes
/// 4. `p` elements get the next block id
/// 5. the element is renamed to `div` or `span` and stripped
/// 6. the customizer, if any, edits the preserved attributes
/// 7. the preserved attributes are committed in order
pub struct RewriteEngine {
    registry: ElementRegistry,
}

impl RewriteEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Rewrite a document in place.
    ///
    /// # Errors
    /// Returns `Customize` if the customization callback fails. The document
    /// is left partially rewritten in that case and should be discarded.
    pub fn rewrite(
        &self,
        document: &mut Document,
        options: &mut ConvertOptions,
    ) -> Result<RewriteSummary> {
        let mut counter = BlockCounter::with_mapper(options.block_id.as_deref());
        let customizer = &mut options.customizer;
        let mut summary = RewriteSummary::default();

        for id in document.element_ids() {
            if summary.removed > 0 && !document.is_attached(id) {
                continue;
            }
            let Some(element) = document.element(id) else {
                continue;
            };

            let original_name = element.original_name().to_string();
            let Some(output_tag) = self.registry.classify(&original_name).output_tag() else {
                tracing::trace!(tag = %original_name, "Removing skipped element");
                document.detach(id);
                summary.removed += 1;
                continue;
            };

            let mut preserved = PreservedAttributes::new();
            preserved.insert(CLASS_ATTR, original_name.as_str());

            if let Some(handler) = self.registry.get_handler(element) {
                handler.preserve(element, &mut preserved);
            }

            if original_name == PARAGRAPH_TAG {
                preserved.insert(BLOCK_ID_ATTR, counter.next_id());
            }

            document.with_element_mut(id, |element| {
                element.rename(output_tag);
                element.clear_attributes();
            });

            if let Some(customizer) = customizer.as_mut() {
                if let Some(node) = document.node(id) {
                    customizer
                        .customize(node, &mut preserved)
                        .map_err(ConvertError::Customize)?;
                }
            }

            document.with_element_mut(id, |element| {
                for (key, value) in preserved {
                    element.set_attribute(key, value);
                }
            });
            summary.elements += 1;
        }

        summary.blocks = counter.count();
        tracing::debug!(
            elements = summary.elements,
            blocks = summary.blocks,
            removed = summary.removed,
            "Rewrote document"
        );

        Ok(summary)
    }
}
