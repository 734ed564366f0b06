//! Registry configuration for congressional bill XML.

use super::core::ElementRegistry;
use super::handlers::UscCitationHandler;
use crate::config::{EXTERNAL_XREF_TAG, METADATA_TAG};

/// Element names rendered as block containers (`div`).
///
/// Every other element name is rendered inline (`span`).
pub const BLOCKS: &[&str] = &[
    // Document forms
    "bill",
    "form",
    "amendment-form",
    "engrossed-amendment-form",
    "resolution-form",
    // Document bodies
    "legis-body",
    "resolution-body",
    "engrossed-amendment-body",
    "amendment-body",
    // Amendments
    "amendment",
    "amendment-block",
    "amendment-instruction",
    // Hierarchy
    "title",
    "subchapter",
    "section",
    "subsection",
    "paragraph",
    "subparagraph",
    "clause",
    "quoted-block",
    // Table of contents
    "toc",
    "toc-entry",
    // Paragraph containers, original or synthetic
    "p",
];

/// Element names always wrapped in their own paragraph container when the
/// containerization pass runs.
pub const DISPLAY_BLOCKS: &[&str] = &["continuation-text", "official-title"];

/// Create a registry configured for House and Senate bill XML.
///
/// # Examples
/// ```
/// use bills_html::registry::{create_bill_registry, ElementType};
///
/// let registry = create_bill_registry();
/// assert_eq!(registry.classify("section"), ElementType::Block);
/// assert_eq!(registry.classify("quote"), ElementType::Inline);
/// assert_eq!(registry.classify("metadata"), ElementType::Skip);
/// ```
#[must_use]
pub fn create_bill_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    registry.blocks(BLOCKS.iter().copied());
    registry.display_blocks(DISPLAY_BLOCKS.iter().copied());

    // Citation handlers
    registry.register(EXTERNAL_XREF_TAG, UscCitationHandler);

    // Dublin Core metadata block at the top of every bill
    registry.skip([METADATA_TAG]);

    registry
}
