//! Navigation helpers over the document tree.
//!
//! All tag comparisons use the element's original name.

use ego_tree::NodeRef;

use super::tree::XmlNode;

/// Get the original tag name of an element node.
///
/// # Returns
/// Tag name, or `None` for text, comment and document nodes
///
/// # Examples
/// ```
/// use bills_html::xml::{get_tag_name, Document};
///
/// let doc = Document::parse("<bill><section/></bill>").unwrap();
/// let bill = doc.root_element_node().unwrap();
/// assert_eq!(get_tag_name(bill), Some("bill"));
/// ```
pub fn get_tag_name<'a>(node: NodeRef<'a, XmlNode>) -> Option<&'a str> {
    node.value().as_element().map(|el| el.original_name())
}

/// Check if a node is an element with the given original tag name.
pub fn has_tag(node: NodeRef<'_, XmlNode>, tag: &str) -> bool {
    get_tag_name(node) == Some(tag)
}

/// Get the original tag name of a node's parent element.
///
/// Returns `None` for the root element, whose parent is the document node.
pub fn parent_tag<'a>(node: NodeRef<'a, XmlNode>) -> Option<&'a str> {
    node.parent().and_then(get_tag_name)
}

/// Find the next element sibling, looking through whitespace and comments.
///
/// Any other node in between (non-blank text) ends the search.
///
/// # Examples
/// ```
/// use bills_html::xml::{get_tag_name, next_element_sibling, Document};
///
/// let doc = Document::parse("<p><enum>1.</enum>\n  <header>H</header></p>").unwrap();
/// let enum_node = doc.root_element_node().unwrap().first_child().unwrap();
/// let header = next_element_sibling(enum_node).unwrap();
/// assert_eq!(get_tag_name(header), Some("header"));
/// ```
pub fn next_element_sibling(node: NodeRef<'_, XmlNode>) -> Option<NodeRef<'_, XmlNode>> {
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        if sibling.value().is_element() {
            return Some(sibling);
        }
        if !sibling.value().is_insignificant() {
            return None;
        }
        current = sibling.next_sibling();
    }
    None
}

/// Concatenate all descendant text of a node, trimmed.
pub fn get_text(node: NodeRef<'_, XmlNode>) -> String {
    let text: String = node
        .descendants()
        .filter_map(|n| match n.value() {
            XmlNode::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Document;

    fn first_child_element(doc: &Document) -> NodeRef<'_, XmlNode> {
        doc.root_element_node()
            .unwrap()
            .children()
            .find(|n| n.value().is_element())
            .unwrap()
    }

    #[test]
    fn test_get_tag_name_text_node() {
        let doc = Document::parse("<bill>text</bill>").unwrap();
        let text = doc.root_element_node().unwrap().first_child().unwrap();
        assert_eq!(get_tag_name(text), None);
    }

    #[test]
    fn test_parent_tag() {
        let doc = Document::parse("<section><text/></section>").unwrap();
        let root = doc.root_element_node().unwrap();
        assert_eq!(parent_tag(root), None);
        assert_eq!(parent_tag(first_child_element(&doc)), Some("section"));
    }

    #[test]
    fn test_has_tag() {
        let doc = Document::parse("<section/>").unwrap();
        let root = doc.root_element_node().unwrap();
        assert!(has_tag(root, "section"));
        assert!(!has_tag(root, "title"));
    }

    #[test]
    fn test_next_element_sibling_skips_comment() {
        let doc = Document::parse("<p><enum/><!-- note --> <header/></p>").unwrap();
        let next = next_element_sibling(first_child_element(&doc)).unwrap();
        assert!(has_tag(next, "header"));
    }

    #[test]
    fn test_next_element_sibling_stops_at_text() {
        let doc = Document::parse("<p><enum/> and <header/></p>").unwrap();
        assert!(next_element_sibling(first_child_element(&doc)).is_none());
    }

    #[test]
    fn test_next_element_sibling_none_at_end() {
        let doc = Document::parse("<p><enum/>  </p>").unwrap();
        assert!(next_element_sibling(first_child_element(&doc)).is_none());
    }

    #[test]
    fn test_get_text() {
        let doc = Document::parse("<section> <enum>2.</enum> <header>Short title</header> </section>")
            .unwrap();
        assert_eq!(
            get_text(doc.root_element_node().unwrap()),
            "2. Short title"
        );
    }
}
