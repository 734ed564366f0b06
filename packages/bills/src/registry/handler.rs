//! Element handler trait definition.

use super::types::PreservedAttributes;
use crate::xml::Element;

/// Trait for element handlers.
///
/// Handlers are registered for a tag name and contribute attributes derived
/// from the element's original attributes before those are stripped.
pub trait ElementHandler: Send + Sync {
    /// Check if this handler can process the given element.
    ///
    /// Default implementation always returns true.
    fn can_handle(&self, _element: &Element) -> bool {
        true
    }

    /// Add derived attributes for the element.
    ///
    /// # Arguments
    /// * `element` - The element, still carrying its original attributes
    /// * `attributes` - The preserved attribute set being built for it
    fn preserve(&self, element: &Element, attributes: &mut PreservedAttributes);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestHandler;

    impl ElementHandler for TestHandler {
        fn preserve(&self, element: &Element, attributes: &mut PreservedAttributes) {
            if let Some(value) = element.attribute("id") {
                attributes.insert("data-id", value);
            }
        }
    }

    #[test]
    fn test_handler_trait() {
        let handler = TestHandler;
        let element = Element::new("section").with_attribute("id", "H1");
        assert!(handler.can_handle(&element));

        let mut attributes = PreservedAttributes::new();
        handler.preserve(&element, &mut attributes);
        assert_eq!(attributes.get("data-id"), Some("H1"));
    }
}
