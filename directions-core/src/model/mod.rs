//! Data model for the route graph
//!
//! Contains the node and edge weights and the graph wrapper used by routing.

pub mod components;
pub mod graph;

pub use components::{RouteEdge, RouteNode};
pub use graph::RouteGraph;
