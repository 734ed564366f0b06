//! Owned, mutable XML tree.
//!
//! `roxmltree` is read-only, so a parsed document is copied into an
//! `ego_tree::Tree`. Children are owned by the arena; parent and sibling
//! links are navigation only. Every element remembers the tag name it was
//! parsed (or synthesized) with, so classification never looks at a name
//! that has already been rewritten.

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use roxmltree::ParsingOptions;

use crate::error::Result;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// The document node. Its single element child is the root element.
    Document,
    /// An element.
    Element(Element),
    /// Character data.
    Text(String),
    /// A comment.
    Comment(String),
}

impl XmlNode {
    /// Return the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Check if this node is an element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, XmlNode::Element(_))
    }

    /// Check if this node is whitespace-only text or a comment.
    ///
    /// Such nodes are transparent to sibling lookahead.
    #[must_use]
    pub fn is_insignificant(&self) -> bool {
        match self {
            XmlNode::Text(text) => text.trim().is_empty(),
            XmlNode::Comment(_) => true,
            _ => false,
        }
    }
}

/// An element with a mutable name and attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    original_name: String,
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Create an element without attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Tag name the element was parsed or synthesized with.
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Current tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the current tag name. The original name is kept.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Remove every attribute.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }
}

/// A parsed document that can be rewritten in place.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<XmlNode>,
}

impl Document {
    /// Parse an XML string.
    ///
    /// DOCTYPE declarations are accepted (congressional bill XML always
    /// carries one); processing instructions are dropped.
    ///
    /// # Errors
    /// Returns `XmlParse` if the input is not well-formed.
    ///
    /// # Examples
    /// ```
    /// use bills_html::xml::Document;
    ///
    /// let doc = Document::parse("<bill><section/></bill>").unwrap();
    /// assert_eq!(doc.root_element().unwrap().original_name(), "bill");
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let source = roxmltree::Document::parse_with_options(xml, options)?;

        let mut tree = Tree::new(XmlNode::Document);
        copy_children(source.root(), &mut tree.root_mut());

        Ok(Self { tree })
    }

    /// Access the underlying tree.
    #[must_use]
    pub fn tree(&self) -> &Tree<XmlNode> {
        &self.tree
    }

    /// Get a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, XmlNode>> {
        self.tree.get(id)
    }

    /// Get an element by id.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.tree.get(id)?.value().as_element()
    }

    /// Run `f` against a mutable element.
    ///
    /// Returns `None` if `id` is not an element.
    pub fn with_element_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        match node.value() {
            XmlNode::Element(element) => Some(f(element)),
            _ => None,
        }
    }

    /// The root element node, if still attached.
    #[must_use]
    pub fn root_element_node(&self) -> Option<NodeRef<'_, XmlNode>> {
        self.tree
            .root()
            .children()
            .find(|child| child.value().is_element())
    }

    /// The root element.
    #[must_use]
    pub fn root_element(&self) -> Option<&Element> {
        self.root_element_node()?.value().as_element()
    }

    /// Snapshot every attached element id in document order.
    ///
    /// Callers that mutate the tree iterate this snapshot rather than a live
    /// traversal.
    #[must_use]
    pub fn element_ids(&self) -> Vec<NodeId> {
        self.tree
            .root()
            .descendants()
            .filter(|node| node.value().is_element())
            .map(|node| node.id())
            .collect()
    }

    /// Check whether a node is still reachable from the document node.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let root_id = self.tree.root().id();
        self.tree
            .get(id)
            .is_some_and(|node| node.ancestors().any(|ancestor| ancestor.id() == root_id))
    }

    /// Detach a node and its subtree from the document.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(mut node) = self.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Wrap the sibling run `first..=last` in a new container element.
    ///
    /// The container is inserted as the previous sibling of `first`, then every
    /// node of the run (including whitespace and comments between members) is
    /// moved under it in order.
    ///
    /// Returns the container id, or `None` if `last` does not follow `first`
    /// or `first` has no parent.
    pub fn wrap_in_container(
        &mut self,
        first: NodeId,
        last: NodeId,
        container: Element,
    ) -> Option<NodeId> {
        let members = self.sibling_run(first, last)?;

        if self.tree.get(first)?.parent().is_none() {
            return None;
        }
        let container_id = self
            .tree
            .get_mut(first)?
            .insert_before(XmlNode::Element(container))
            .id();

        let mut container_node = self.tree.get_mut(container_id)?;
        for member in members {
            container_node.append_id(member);
        }

        Some(container_id)
    }

    fn sibling_run(&self, first: NodeId, last: NodeId) -> Option<Vec<NodeId>> {
        let mut current = self.tree.get(first)?;
        let mut run = vec![current.id()];
        while current.id() != last {
            current = current.next_sibling()?;
            run.push(current.id());
        }
        Some(run)
    }
}

/// Copy the children of a `roxmltree` node under `target`.
fn copy_children(source: roxmltree::Node<'_, '_>, target: &mut NodeMut<'_, XmlNode>) {
    for child in source.children() {
        if child.is_element() {
            let mut element = Element::new(child.tag_name().name());
            for attribute in child.attributes() {
                element = element.with_attribute(attribute.name(), attribute.value());
            }
            let mut appended = target.append(XmlNode::Element(element));
            copy_children(child, &mut appended);
        } else if child.is_text() {
            if let Some(text) = child.text() {
                target.append(XmlNode::Text(text.to_string()));
            }
        } else if child.is_comment() {
            if let Some(text) = child.text() {
                target.append(XmlNode::Comment(text.to_string()));
            }
        }
    }
}
