use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::{debug, trace};

use super::state::State;
use crate::{Distance, Error, RouteGraph, VertexId};

/// Per-vertex bookkeeping of a single shortest-path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathState {
    /// Best known distance from the source, `None` while unreached
    pub distance: Option<Distance>,
    /// Vertex before this one on the best known path
    pub predecessor: Option<VertexId>,
    /// Set once the distance is final
    pub visited: bool,
}

/// Shortest-path tree from one source over the registered vertices of a graph
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    states: HashMap<VertexId, PathState>,
}

impl ShortestPaths {
    /// Dijkstra's algorithm from the vertex named `source`.
    ///
    /// Vertices with equal tentative distances are settled in file order, so
    /// the predecessor chosen between equally short paths is deterministic.
    /// Edges are relaxed with the weight of the first matching edge, the same
    /// value [`RouteGraph::weight`] reports.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSource`] if `source` is not a registered vertex
    pub fn compute(graph: &RouteGraph, source: &str) -> Result<Self, Error> {
        let start = graph
            .vertex(source)
            .ok_or_else(|| Error::UnknownSource(source.to_string()))?;

        let mut states: HashMap<VertexId, PathState> = graph
            .vertex_ids()
            .iter()
            .map(|&vertex| (vertex, PathState::default()))
            .collect();
        let mut heap = BinaryHeap::with_capacity(graph.vertex_count());

        // Start node has distance 0
        if let Some(state) = states.get_mut(&start) {
            state.distance = Some(0);
        }
        heap.push(State {
            cost: 0,
            order: file_order(graph, start)?,
            node: start,
        });

        let mut settled = 0usize;
        while let Some(State { cost, node, .. }) = heap.pop() {
            let Some(state) = states.get_mut(&node) else {
                continue;
            };
            // Stale entry, a shorter one already settled this vertex
            if state.visited {
                continue;
            }
            state.visited = true;
            settled += 1;

            for next in graph.neighbors(node) {
                // Destination-only names have no state and are never routed through
                let Some(next_state) = states.get_mut(&next) else {
                    continue;
                };
                if next_state.visited {
                    continue;
                }
                let Some(weight) = graph.weight_between(node, next) else {
                    continue;
                };
                let Some(next_cost) = cost.checked_add(weight) else {
                    continue;
                };

                if next_state.distance.is_none_or(|best| next_cost < best) {
                    trace!(
                        "relax {} -> {}: {next_cost}",
                        graph.name(node).unwrap_or_default(),
                        graph.name(next).unwrap_or_default()
                    );
                    next_state.distance = Some(next_cost);
                    next_state.predecessor = Some(node);
                    heap.push(State {
                        cost: next_cost,
                        order: file_order(graph, next)?,
                        node: next,
                    });
                }
            }
        }

        // Whatever is left is unreachable: settled at infinity with no predecessor
        for state in states.values_mut() {
            state.visited = true;
        }

        debug!(
            "Shortest paths from {source}: {settled} of {} vertices reachable",
            graph.vertex_count()
        );

        Ok(Self {
            source: start,
            states,
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn state(&self, vertex: VertexId) -> Option<&PathState> {
        self.states.get(&vertex)
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.states.get(&vertex)?.distance
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.states.get(&vertex)?.predecessor
    }

    /// The source, and every vertex that was given a predecessor
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        vertex == self.source || self.predecessor(vertex).is_some()
    }

    /// Vertices from the source to `vertex`, both included
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        // Follow predecessors backward from target to start
        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

fn file_order(graph: &RouteGraph, vertex: VertexId) -> Result<usize, Error> {
    graph
        .node(vertex)
        .and_then(|node| node.order)
        .ok_or(Error::InvalidNodeIndex)
}
