use std::io::Write;

use directions_core::prelude::*;
use rstest::rstest;
use tempfile::NamedTempFile;

const MAP: &str = "\
Athens 50 Cleveland 20 Columbus 90 London
Columbus 10 Dayton 40 Cleveland
Dayton 5 Cleveland 70 Toledo
Cleveland 15 Toledo
Toledo
Toledo
";

fn write_map(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write map");
    file
}

fn load(text: &str) -> RouteGraph {
    let file = write_map(text);
    RouteGraph::load(file.path()).expect("load map")
}

#[test]
fn loads_vertices_from_file() {
    let graph = load(MAP);
    assert_eq!(
        graph.vertices().collect::<Vec<_>>(),
        ["Athens", "Columbus", "Dayton", "Cleveland", "Toledo"]
    );
}

#[test]
fn missing_file_fails_before_routing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = RouteGraph::load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(err.to_string().starts_with("file not found"));
}

#[test]
fn invalid_weight_fails_load() {
    let file = write_map("Athens 5O Cleveland\nCleveland\n");
    let err = RouteGraph::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[rstest]
#[case("Athens", "Cleveland", "Athens (20) -> Columbus (10) -> Dayton (5) -> Cleveland", 35)]
#[case("Athens", "Toledo", "Athens (20) -> Columbus (10) -> Dayton (5) -> Cleveland (15) -> Toledo", 50)]
#[case("Columbus", "Toledo", "Columbus (10) -> Dayton (5) -> Cleveland (15) -> Toledo", 30)]
#[case("Dayton", "Dayton", "Dayton (0) -> Dayton", 0)]
#[case("Athens", "Columbus", "Athens (20) -> Columbus", 20)]
fn shortest_routes(
    #[case] source: &str,
    #[case] destination: &str,
    #[case] chain: &str,
    #[case] total: Distance,
) {
    let graph = load(MAP);
    let route = report_one(&graph, source, destination).unwrap();
    assert_eq!(route.to_string(), chain);
    assert_eq!(route.total, total);
}

#[rstest]
#[case("London", "Athens")]
#[case("Nowhere", "Athens")]
fn unknown_sources(#[case] source: &str, #[case] destination: &str) {
    let graph = load(MAP);
    let err = report_one(&graph, source, destination).unwrap_err();
    assert!(matches!(err, Error::UnknownSource(_)));
}

#[rstest]
#[case("Toledo", "Athens")]
#[case("Cleveland", "Columbus")]
#[case("Dayton", "Athens")]
fn unreachable_destinations(#[case] source: &str, #[case] destination: &str) {
    let graph = load(MAP);
    let err = report_one(&graph, source, destination).unwrap_err();
    assert!(matches!(err, Error::Unreachable { .. }));
}

#[test]
fn destination_only_name_cannot_be_queried() {
    let graph = load(MAP);
    assert!(graph.connected("Athens", "London"));
    assert_eq!(graph.weight("Athens", "London"), Some(90));
    assert!(matches!(
        report_one(&graph, "Athens", "London"),
        Err(Error::UnknownDestination(_))
    ));
    assert!(matches!(report_all(&graph, "London"), Err(Error::UnknownSource(_))));
}

#[test]
fn all_routes_from_source() {
    let graph = load(MAP);
    let routes = report_all(&graph, "Columbus").unwrap();
    let summary: Vec<_> = routes
        .iter()
        .map(|route| (route.destination.as_str(), route.total))
        .collect();
    assert_eq!(summary, [("Dayton", 10), ("Cleveland", 15), ("Toledo", 30)]);
}

#[test]
fn single_edge_scenario() {
    let graph = load("Athens 50 Cleveland\nCleveland\n");
    let route = report_one(&graph, "Athens", "Cleveland").unwrap();
    assert_eq!(to_text::render_route(&route, 0), "Athens (50) -> ClevelandTotal: 50");

    let paths = ShortestPaths::compute(&graph, "Cleveland").unwrap();
    let athens = graph.vertex("Athens").unwrap();
    assert!(!paths.is_reachable(athens));
    assert!(matches!(
        report_one(&graph, "Cleveland", "Athens"),
        Err(Error::Unreachable { .. })
    ));
}
