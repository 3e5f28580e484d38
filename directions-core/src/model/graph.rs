use hashbrown::HashMap;
use petgraph::{
    graph::{DiGraph, EdgeReference, NodeIndex},
    visit::EdgeRef,
};

use super::components::{RouteEdge, RouteNode};
use crate::{VertexId, Weight};

/// Directed weighted graph of named places.
///
/// Only names that lead a line of the input are registered vertices. A name
/// seen only as a destination still gets a node so its incoming edges exist,
/// but it is never returned by [`RouteGraph::vertex`] and takes no part in
/// routing.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub(crate) graph: DiGraph<RouteNode, RouteEdge>,
    index: HashMap<String, NodeIndex>,
    vertices: Vec<NodeIndex>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `name`, creating an unregistered one if needed
    pub(crate) fn node_for(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(name) {
            return node;
        }
        let node = self.graph.add_node(RouteNode {
            name: name.to_string(),
            order: None,
        });
        self.index.insert(name.to_string(), node);
        node
    }

    /// Registers `name` as a vertex. Returns `None` if it already was one.
    pub(crate) fn register(&mut self, name: &str) -> Option<NodeIndex> {
        let node = self.node_for(name);
        let order = self.vertices.len();
        let weight = &mut self.graph[node];
        if weight.order.is_some() {
            return None;
        }
        weight.order = Some(order);
        self.vertices.push(node);
        Some(node)
    }

    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: Weight) {
        self.graph.add_edge(from, to, RouteEdge { weight });
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Registered vertex names in file order
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|&node| self.graph[node].name.as_str())
    }

    /// Registered vertex ids in file order
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Looks up a registered vertex by name
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.index
            .get(name)
            .copied()
            .filter(|&node| self.graph[node].is_registered())
    }

    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.graph.node_weight(id).map(|node| node.name.as_str())
    }

    pub(crate) fn node(&self, id: VertexId) -> Option<&RouteNode> {
        self.graph.node_weight(id)
    }

    /// Weight of the first `from -> to` edge in file order
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        let from = self.vertex(from)?;
        let to = *self.index.get(to)?;
        self.weight_between(from, to)
    }

    /// True iff `from` has an outgoing edge to `to`. False for unregistered `from`.
    pub fn connected(&self, from: &str, to: &str) -> bool {
        self.weight(from, to).is_some()
    }

    /// Outgoing edges of `from` in file order
    pub fn outgoing(&self, from: VertexId) -> Vec<(VertexId, Weight)> {
        let mut edges: Vec<EdgeReference<'_, RouteEdge>> = self.graph.edges(from).collect();
        // petgraph walks a node's edges newest first
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| (edge.target(), edge.weight().weight))
            .collect()
    }

    pub(crate) fn weight_between(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.graph
            .edges_connecting(from, to)
            .min_by_key(|edge| edge.id())
            .map(|edge| edge.weight().weight)
    }

    /// Distinct successors of `from`
    pub(crate) fn neighbors(&self, from: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let mut seen = Vec::new();
        self.graph.neighbors(from).filter(move |&next| {
            if seen.contains(&next) {
                false
            } else {
                seen.push(next);
                true
            }
        })
    }
}
