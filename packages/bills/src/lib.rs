//! Bills HTML - Convert congressional bill XML into semantic HTML.
//!
//! House and Senate bills, resolutions and amendments are published as XML.
//! This crate rewrites that XML into HTML where every element is a `div` or
//! a `span`, the original tag name survives as `class`, U.S. Code citations
//! become `data-citation-*` attributes, and paragraph containers carry a
//! sequential `data-block-id`.
//!
//! # Example
//!
//! ```
//! use bills_html::{convert, ConvertOptions};
//!
//! let xml = r#"<section><enum>1.</enum><text>Hello</text></section>"#;
//! let mut options = ConvertOptions::new().with_blocks(true);
//! let html = convert(xml, &mut options).unwrap();
//! assert!(html.contains(r#"<div class="p" data-block-id="1">"#));
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Tag/attribute constants and conversion options
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Mutable document tree, navigation and HTML output
//! - [`registry`]: Block/inline classification and citation handlers
//! - [`containerize`]: Optional pass inserting synthetic paragraph containers
//! - [`rewrite`]: Main rewrite pass and block numbering
//! - [`convert`]: Conversion service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod containerize;
pub mod convert;
pub mod error;
pub mod registry;
pub mod rewrite;
pub mod xml;

// Re-export main functions
pub use convert::{convert, convert_document, convert_file};

// Re-export commonly used items
pub use config::{ConvertOptions, OptionsFile};
pub use error::{ConvertError, Result};
pub use registry::PreservedAttributes;
pub use rewrite::{CustomizeResult, Customizer};
