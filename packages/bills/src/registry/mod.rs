//! Element registry system for classifying bill XML.
//!
//! Classification tables and attribute handlers are plain data bound into
//! the rewrite engine when it is constructed. Nothing here is global or
//! mutable after setup, so independent conversions never share state.

mod config;
mod core;
mod handler;
pub mod handlers;
mod types;

pub use config::{create_bill_registry, BLOCKS, DISPLAY_BLOCKS};
pub use core::ElementRegistry;
pub use handler::ElementHandler;
pub use handlers::{citations, UscCitationHandler};
pub use types::{ElementType, PreservedAttributes};
