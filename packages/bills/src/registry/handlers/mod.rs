//! Element handlers for congressional bill XML.

mod citation;

pub use citation::*;
