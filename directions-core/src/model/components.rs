//! Route graph components - named places and the roads between them

use crate::Weight;

/// Route graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    /// Place name as written in the input file
    pub name: String,
    /// Position among the registered vertices, `None` for names that only
    /// ever appear as a destination
    pub order: Option<usize>,
}

impl RouteNode {
    pub fn is_registered(&self) -> bool {
        self.order.is_some()
    }
}

/// Route graph edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEdge {
    pub weight: Weight,
}
