//! This module is responsible for reading the adjacency-list text format
//! and building a [`RouteGraph`](crate::RouteGraph) from it.

mod builder;
mod parser;

pub use parser::{GraphLine, parse_lines};
