use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};

use super::parser::{GraphLine, parse_lines};
use crate::{Error, RouteGraph};

impl RouteGraph {
    /// Reads a graph from an adjacency-list file
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file cannot be opened, and
    /// other errors if it cannot be read or holds an invalid weight
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("Loading route graph from {}", path.display());
        let file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a graph from any buffered source of adjacency-list text
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or a weight is invalid
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let lines = parse_lines(reader)?;
        let graph = build_graph(&lines);
        debug!(
            "Route graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn build_graph(lines: &[GraphLine]) -> RouteGraph {
    let mut graph = RouteGraph::new();

    for (pos, line) in lines.iter().enumerate() {
        let Some(from) = graph.register(&line.vertex) else {
            let trailing_repeat =
                pos + 1 == lines.len() && pos > 0 && lines[pos - 1].vertex == line.vertex;
            if trailing_repeat {
                debug!("line {}: dropping trailing duplicate of {}", line.line_no, line.vertex);
            } else {
                warn!(
                    "line {}: vertex {} is already defined, ignoring this line",
                    line.line_no, line.vertex
                );
            }
            continue;
        };

        for (weight, destination) in &line.edges {
            let to = graph.node_for(destination);
            graph.add_edge(from, to, *weight);
        }
    }

    graph
}
