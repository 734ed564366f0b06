//! Main rewrite pass: classification, attribute replacement and block ids.

mod counter;
mod customize;
mod engine;

pub use counter::{BlockCounter, BlockIdFn};
pub use customize::{CustomizeResult, Customizer};
pub use engine::{RewriteEngine, RewriteSummary};
