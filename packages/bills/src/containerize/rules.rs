//! Grouping rules for the containerization pass.

use super::types::Group;
use crate::config::{ENUM_TAG, HEADER_TAG, SECTION_TAG, TEXT_TAG, TITLE_TAG};
use crate::registry::ElementRegistry;
use crate::xml::{get_tag_name, has_tag, next_element_sibling, parent_tag, NodeRef, XmlNode};

/// Trait for rules that select sibling runs to wrap in a paragraph container.
///
/// Rules look at original tag names only.
pub trait GroupingRule {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return the run starting at `node` that should be wrapped, if any.
    fn group(&self, node: NodeRef<'_, XmlNode>, registry: &ElementRegistry) -> Option<Group>;
}

/// Groups an `<enum>` with the `<header>` and `<text>` that follow it.
///
/// Enums directly inside `<section>` or `<title>` are left alone; those
/// carry the section or title number, not a paragraph marker.
pub struct EnumGroupRule;

impl GroupingRule for EnumGroupRule {
    fn name(&self) -> &'static str {
        "enum-group"
    }

    fn group(&self, node: NodeRef<'_, XmlNode>, _registry: &ElementRegistry) -> Option<Group> {
        if !has_tag(node, ENUM_TAG) {
            return None;
        }
        if matches!(parent_tag(node), Some(SECTION_TAG | TITLE_TAG)) {
            return None;
        }

        let mut last = node;
        if let Some(header) = next_element_sibling(node).filter(|n| has_tag(*n, HEADER_TAG)) {
            last = header;
            if let Some(text) = next_element_sibling(header).filter(|n| has_tag(*n, TEXT_TAG)) {
                last = text;
            }
        }

        Some(Group::new(node.id(), last.id()))
    }
}

/// Wraps a `<text>` that sits directly inside a `<section>`.
pub struct SectionTextRule;

impl GroupingRule for SectionTextRule {
    fn name(&self) -> &'static str {
        "section-text"
    }

    fn group(&self, node: NodeRef<'_, XmlNode>, _registry: &ElementRegistry) -> Option<Group> {
        (has_tag(node, TEXT_TAG) && parent_tag(node) == Some(SECTION_TAG))
            .then(|| Group::single(node.id()))
    }
}

/// Wraps every display block (official title, continuation text) on its own.
pub struct DisplayBlockRule;

impl GroupingRule for DisplayBlockRule {
    fn name(&self) -> &'static str {
        "display-block"
    }

    fn group(&self, node: NodeRef<'_, XmlNode>, registry: &ElementRegistry) -> Option<Group> {
        get_tag_name(node)
            .filter(|tag| registry.is_display_block(tag))
            .map(|_| Group::single(node.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_bill_registry;
    use crate::xml::Document;

    /// Find the first element with the given tag and apply `rule` to it.
    fn apply(rule: &dyn GroupingRule, xml: &str, tag: &str) -> Option<(String, String)> {
        let doc = Document::parse(xml).unwrap();
        let registry = create_bill_registry();
        let node = doc
            .tree()
            .root()
            .descendants()
            .find(|n| has_tag(*n, tag))
            .unwrap();

        rule.group(node, &registry).map(|group| {
            let name = |id| get_tag_name(doc.node(id).unwrap()).unwrap().to_string();
            (name(group.first), name(group.last))
        })
    }

    fn pair(first: &str, last: &str) -> Option<(String, String)> {
        Some((first.to_string(), last.to_string()))
    }

    #[test]
    fn test_enum_group_full() {
        let xml = "<paragraph><enum>(1)</enum><header>H</header><text>T</text></paragraph>";
        assert_eq!(apply(&EnumGroupRule, xml, "enum"), pair("enum", "text"));
    }

    #[test]
    fn test_enum_group_header_only() {
        let xml = "<paragraph><enum>(1)</enum><header>H</header><subparagraph/></paragraph>";
        assert_eq!(apply(&EnumGroupRule, xml, "enum"), pair("enum", "header"));
    }

    #[test]
    fn test_enum_group_text_without_header_not_collected() {
        let xml = "<paragraph><enum>(1)</enum><text>T</text></paragraph>";
        assert_eq!(apply(&EnumGroupRule, xml, "enum"), pair("enum", "enum"));
    }

    #[test]
    fn test_enum_group_skips_whitespace_between_siblings() {
        let xml = "<paragraph>\n  <enum>(1)</enum>\n  <header>H</header>\n  <text>T</text>\n</paragraph>";
        assert_eq!(apply(&EnumGroupRule, xml, "enum"), pair("enum", "text"));
    }

    #[test]
    fn test_enum_group_broken_by_text() {
        let xml = "<paragraph><enum>(1)</enum> stray <header>H</header></paragraph>";
        assert_eq!(apply(&EnumGroupRule, xml, "enum"), pair("enum", "enum"));
    }

    #[test]
    fn test_enum_group_ignored_under_section_and_title() {
        let section = "<section><enum>1.</enum><header>H</header></section>";
        let title = "<title><enum>I</enum><header>H</header></title>";
        assert_eq!(apply(&EnumGroupRule, section, "enum"), None);
        assert_eq!(apply(&EnumGroupRule, title, "enum"), None);
    }

    #[test]
    fn test_enum_group_other_tag() {
        assert_eq!(apply(&EnumGroupRule, "<p><header/></p>", "header"), None);
    }

    #[test]
    fn test_section_text() {
        let xml = "<section><enum>1.</enum><text>T</text></section>";
        assert_eq!(apply(&SectionTextRule, xml, "text"), pair("text", "text"));
    }

    #[test]
    fn test_section_text_other_parent() {
        let xml = "<subsection><text>T</text></subsection>";
        assert_eq!(apply(&SectionTextRule, xml, "text"), None);
    }

    #[test]
    fn test_display_block() {
        let xml = "<form><official-title>To amend</official-title></form>";
        assert_eq!(
            apply(&DisplayBlockRule, xml, "official-title"),
            pair("official-title", "official-title")
        );
        assert_eq!(apply(&DisplayBlockRule, xml, "form"), None);
    }
}
