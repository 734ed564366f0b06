//! Citation handlers for cross-reference elements.
//!
//! Bill XML marks references to other legal documents with
//! `<external-xref legal-doc="..." parsable-cite="...">`. References into the
//! United States Code are re-encoded as `data-citation-*` attributes.

use crate::config::{
    CITATION_ID_ATTR, CITATION_TYPE_ATTR, EXTERNAL_XREF_TAG, LEGAL_DOC_ATTR, PARSABLE_CITE_ATTR,
    USC_LEGAL_DOC,
};
use crate::registry::handler::ElementHandler;
use crate::registry::types::PreservedAttributes;
use crate::xml::Element;

/// Extract citation attributes from an element.
///
/// Returns an empty set unless the element is an `external-xref` whose
/// `legal-doc` is `usc` and which carries a `parsable-cite`. A missing
/// `parsable-cite` is not an error.
///
/// # Examples
/// ```
/// use bills_html::registry::citations;
/// use bills_html::xml::Element;
///
/// let xref = Element::new("external-xref")
///     .with_attribute("legal-doc", "usc")
///     .with_attribute("parsable-cite", "usc/12/5301");
/// let attrs = citations(&xref);
/// assert_eq!(attrs.get("data-citation-type"), Some("usc"));
/// assert_eq!(attrs.get("data-citation-id"), Some("usc/12/5301"));
/// ```
#[must_use]
pub fn citations(element: &Element) -> PreservedAttributes {
    let mut attributes = PreservedAttributes::new();

    if element.original_name() != EXTERNAL_XREF_TAG
        || element.attribute(LEGAL_DOC_ATTR) != Some(USC_LEGAL_DOC)
    {
        return attributes;
    }

    if let Some(cite) = element.attribute(PARSABLE_CITE_ATTR) {
        attributes.insert(CITATION_TYPE_ATTR, USC_LEGAL_DOC);
        attributes.insert(CITATION_ID_ATTR, cite);
    }

    attributes
}

/// Handler for `<external-xref>` elements citing the U.S. Code.
pub struct UscCitationHandler;

impl ElementHandler for UscCitationHandler {
    fn can_handle(&self, element: &Element) -> bool {
        element.attribute(LEGAL_DOC_ATTR) == Some(USC_LEGAL_DOC)
    }

    fn preserve(&self, element: &Element, attributes: &mut PreservedAttributes) {
        attributes.merge(citations(element));
    }
}
