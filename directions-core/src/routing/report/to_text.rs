//! Plain text rendering of routes and graphs

use std::fmt::Write;

use super::Route;
use crate::RouteGraph;

/// Width of the route column before the total
pub const DEFAULT_COLUMN_WIDTH: usize = 60;

/// `chain` left-aligned in `width` columns, followed by the total
pub fn render_route(route: &Route, width: usize) -> String {
    format!("{route:<width$}Total: {}", route.total)
}

pub fn render_one(route: &Route, width: usize) -> String {
    format!(
        "Shortest path from {} to {}:\n{}\n",
        route.source,
        route.destination,
        render_route(route, width)
    )
}

pub fn render_all(source: &str, routes: &[Route], width: usize) -> String {
    let mut out = format!("Shortest path from {source} to all destinations:\n");
    for route in routes {
        let _ = write!(
            out,
            "\n{source} to {}...\n{}\n",
            route.destination,
            render_route(route, width)
        );
    }
    out
}

/// Numbered list of the registered vertices
pub fn render_vertices(graph: &RouteGraph) -> String {
    let mut out = String::from("Vertices:\n");
    for (idx, name) in graph.vertices().enumerate() {
        let _ = writeln!(out, "{}. {name}", idx + 1);
    }
    out
}

/// Adjacency list, one registered vertex per line: `A -> 50 B -> 20 C`
pub fn render_graph(graph: &RouteGraph) -> String {
    let mut out = String::new();
    for &vertex in graph.vertex_ids() {
        out.push_str(graph.name(vertex).unwrap_or_default());
        for (to, weight) in graph.outgoing(vertex) {
            let _ = write!(out, " -> {weight} {}", graph.name(to).unwrap_or_default());
        }
        out.push('\n');
    }
    out
}
