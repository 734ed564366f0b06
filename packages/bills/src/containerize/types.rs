//! Types for the containerization pass.

use crate::xml::NodeId;

/// A run of siblings, from `first` to `last` inclusive, to wrap together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// First member of the run.
    pub first: NodeId,
    /// Last member of the run.
    pub last: NodeId,
}

impl Group {
    /// Create a run from `first` to `last`.
    #[must_use]
    pub fn new(first: NodeId, last: NodeId) -> Self {
        Self { first, last }
    }

    /// Create a run holding a single node.
    #[must_use]
    pub fn single(node: NodeId) -> Self {
        Self::new(node, node)
    }
}
