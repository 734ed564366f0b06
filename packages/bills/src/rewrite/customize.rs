//! Customization seam for callers that post-process output attributes.

use crate::error::BoxError;
use crate::registry::PreservedAttributes;
use crate::xml::{NodeRef, XmlNode};

/// Result returned by a customization callback.
pub type CustomizeResult = std::result::Result<(), BoxError>;

/// Per-element callback invoked after an element is renamed and stripped,
/// before its preserved attributes are committed.
///
/// The node already carries its output name (`div` or `span`) and no
/// attributes; the original tag name is available as the `class` entry of
/// `attributes`. Entries may be added, removed or changed in place. An error
/// aborts the conversion.
pub trait Customizer {
    /// Edit the attributes about to be committed to `node`.
    fn customize(
        &mut self,
        node: NodeRef<'_, XmlNode>,
        attributes: &mut PreservedAttributes,
    ) -> CustomizeResult;
}

impl<F> Customizer for F
where
    F: FnMut(NodeRef<'_, XmlNode>, &mut PreservedAttributes) -> CustomizeResult,
{
    fn customize(
        &mut self,
        node: NodeRef<'_, XmlNode>,
        attributes: &mut PreservedAttributes,
    ) -> CustomizeResult {
        self(node, attributes)
    }
}
