//! Containerization pass for bill XML.
//!
//! Runs once before the rewrite and inserts synthetic `<p>` elements around
//! enum/header/text runs, section-level text and display blocks, so every
//! paragraph-level unit gets its own block id.

mod engine;
mod rules;
mod types;

pub use engine::Containerizer;
pub use rules::{DisplayBlockRule, EnumGroupRule, GroupingRule, SectionTextRule};
pub use types::Group;
