//! Route reconstruction from a shortest-path tree

pub mod to_json;
pub mod to_text;

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{Distance, Error, RouteGraph, ShortestPaths, VertexId, Weight};

/// One traversed edge of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Shortest route between two vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub source: String,
    pub destination: String,
    pub legs: Vec<Leg>,
    /// Distance recorded by the search
    pub total: Distance,
}

impl Route {
    /// Zero-length route from a vertex to itself
    pub fn trivial(vertex: &str) -> Self {
        Self {
            source: vertex.to_string(),
            destination: vertex.to_string(),
            legs: vec![Leg {
                from: vertex.to_string(),
                to: vertex.to_string(),
                weight: 0,
            }],
            total: 0,
        }
    }

    /// Walks the shortest-path tree from `destination` back to its source
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`] if no path to `destination` was found
    pub fn from_tree(
        graph: &RouteGraph,
        paths: &ShortestPaths,
        destination: VertexId,
    ) -> Result<Self, Error> {
        let name = |vertex: VertexId| {
            graph
                .name(vertex)
                .map(str::to_string)
                .ok_or(Error::InvalidNodeIndex)
        };

        let source = name(paths.source())?;
        let destination_name = name(destination)?;
        let vertices = paths.path_to(destination).ok_or_else(|| Error::Unreachable {
            from: source.clone(),
            to: destination_name.clone(),
        })?;

        let legs = vertices
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| -> Result<Leg, Error> {
                let weight = graph
                    .weight_between(from, to)
                    .ok_or(Error::InvalidNodeIndex)?;
                Ok(Leg {
                    from: name(from)?,
                    to: name(to)?,
                    weight,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let total = paths.distance(destination).ok_or(Error::InvalidNodeIndex)?;

        Ok(Self {
            source,
            destination: destination_name,
            legs,
            total,
        })
    }

    /// Sum of the leg weights
    pub fn edge_total(&self) -> Distance {
        self.legs.iter().map(|leg| leg.weight).sum()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self
            .legs
            .iter()
            .map(|leg| format!("{} ({})", leg.from, leg.weight))
            .chain(std::iter::once(self.destination.clone()))
            .join(" -> ");
        f.pad(&chain)
    }
}

/// Shortest routes from `source` to every vertex it can reach, in file order.
///
/// The source itself is not listed.
///
/// # Errors
///
/// Returns [`Error::UnknownSource`] if `source` is not a registered vertex
pub fn report_all(graph: &RouteGraph, source: &str) -> Result<Vec<Route>, Error> {
    let paths = ShortestPaths::compute(graph, source)?;

    graph
        .vertex_ids()
        .iter()
        .filter(|&&vertex| paths.predecessor(vertex).is_some())
        .map(|&vertex| Route::from_tree(graph, &paths, vertex))
        .collect()
}

/// Shortest route from `source` to `destination`
///
/// # Errors
///
/// Returns [`Error::UnknownSource`], [`Error::UnknownDestination`] or
/// [`Error::Unreachable`] when no route can be given
pub fn report_one(graph: &RouteGraph, source: &str, destination: &str) -> Result<Route, Error> {
    if graph.vertex(source).is_none() {
        return Err(Error::UnknownSource(source.to_string()));
    }
    if source == destination {
        return Ok(Route::trivial(source));
    }

    let target = graph
        .vertex(destination)
        .ok_or_else(|| Error::UnknownDestination(destination.to_string()))?;
    let paths = ShortestPaths::compute(graph, source)?;
    Route::from_tree(graph, &paths, target)
}
