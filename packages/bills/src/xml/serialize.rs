//! HTML serialization of a rewritten document.

use ego_tree::NodeRef;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::tree::{Document, XmlNode};
use crate::error::{ConvertError, Result};

/// Serialize the document's root element to an HTML string.
///
/// Elements are always written with explicit end tags, so an empty
/// `<span>` never collapses to `<span/>`. No XML declaration is emitted.
///
/// # Errors
/// Returns `EmptyDocument` if the root element was removed.
///
/// # Examples
/// ```
/// use bills_html::xml::{to_html, Document};
///
/// let doc = Document::parse(r#"<span class="quote">a &lt; b</span>"#).unwrap();
/// assert_eq!(to_html(&doc).unwrap(), r#"<span class="quote">a &lt; b</span>"#);
/// ```
pub fn to_html(document: &Document) -> Result<String> {
    let root = document
        .root_element_node()
        .ok_or(ConvertError::EmptyDocument)?;

    let mut writer = Writer::new(Vec::new());
    write_node(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(|e| ConvertError::Serialize(e.to_string()))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: NodeRef<'_, XmlNode>) -> Result<()> {
    let event = match node.value() {
        XmlNode::Element(element) => {
            let mut start = BytesStart::new(element.name());
            for (key, value) in element.attributes() {
                start.push_attribute((key, value));
            }
            write_event(writer, Event::Start(start))?;
            for child in node.children() {
                write_node(writer, child)?;
            }
            Event::End(BytesEnd::new(element.name()))
        }
        XmlNode::Text(text) => Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))),
        XmlNode::Comment(text) => Event::Comment(BytesText::from_escaped(text.as_str())),
        XmlNode::Document => return Ok(()),
    };
    write_event(writer, event)
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| ConvertError::Serialize(e.to_string()))
}
