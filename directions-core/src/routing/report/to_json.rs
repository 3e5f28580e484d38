//! JSON rendering of routes and graphs

use serde_json::{Value as JsonValue, json};

use super::Route;
use crate::RouteGraph;

pub fn route(route: &Route) -> JsonValue {
    json!({
        "source": route.source,
        "destination": route.destination,
        "legs": route.legs,
        "total": route.total,
    })
}

pub fn routes(source: &str, routes: &[Route]) -> JsonValue {
    json!({
        "source": source,
        "routes": routes.iter().map(route).collect::<Vec<_>>(),
    })
}

pub fn vertices(graph: &RouteGraph) -> JsonValue {
    json!({ "vertices": graph.vertices().collect::<Vec<_>>() })
}

pub fn graph(graph: &RouteGraph) -> JsonValue {
    let vertices: Vec<JsonValue> = graph
        .vertex_ids()
        .iter()
        .map(|&vertex| {
            let edges: Vec<JsonValue> = graph
                .outgoing(vertex)
                .into_iter()
                .map(|(to, weight)| json!({ "to": graph.name(to), "weight": weight }))
                .collect();
            json!({ "name": graph.name(vertex), "edges": edges })
        })
        .collect();
    json!({ "vertices": vertices })
}
