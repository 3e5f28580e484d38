// Re-export key components
pub use crate::model::{RouteEdge, RouteGraph, RouteNode};
pub use crate::routing::dijkstra::{PathState, ShortestPaths};
pub use crate::routing::report::{Leg, Route, report_all, report_one, to_json, to_text};

pub use crate::Error;

// Core scalar types
pub use crate::Distance;
pub use crate::VertexId;
pub use crate::Weight;
