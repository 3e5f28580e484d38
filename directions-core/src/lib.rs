//! Shortest routes on small, static, weighted directed graphs.
//!
//! A graph is read from a plain text adjacency list ([`RouteGraph::load`]),
//! searched from one source with Dijkstra's algorithm ([`ShortestPaths`])
//! and reported either as the whole shortest-path tree ([`report_all`]) or
//! as a single route ([`report_one`]).

mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{RouteEdge, RouteGraph, RouteNode};
pub use routing::dijkstra::{PathState, ShortestPaths};
pub use routing::report::{Leg, Route, report_all, report_one};

/// Edge weight as written in the input file
pub type Weight = u32;

/// Accumulated path length
pub type Distance = u32;

/// Handle to a node of the underlying graph
pub type VertexId = petgraph::graph::NodeIndex;
