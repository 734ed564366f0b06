//! XML document model: parsing, navigation, in-place mutation and HTML output.

mod serialize;
mod tree;
mod utils;

pub use ego_tree::{NodeId, NodeRef};
pub use serialize::to_html;
pub use tree::{Document, Element, XmlNode};
pub use utils::{get_tag_name, get_text, has_tag, next_element_sibling, parent_tag};
