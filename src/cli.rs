use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::OutputFormat;

pub const USAGE: &str = "\
sample runs:
route mygraph.txt Athens Cleveland (display the route, distances, and total distance)
route mygraph.txt Athens London (display no route exists, destination unreachable)
route mygraph.txt London Athens (display no route exists, source location does not exist)
route mygraph.txt Athens (display the shortest paths from Athens to all the destinations)
route mygraph.txt (show all the available vertices)
route --graph mygraph.txt (show the adjacency list)
route (display a usage message)
";

/// Shortest routes between places listed in an adjacency-list file
#[derive(Parser, Debug)]
#[command(name = "route", version, about)]
pub struct Cli {
    /// Graph file, one `VERTEX (WEIGHT DESTINATION)*` line per vertex
    pub file: Option<PathBuf>,
    /// Vertex to route from
    pub source: Option<String>,
    /// Vertex to route to
    pub destination: Option<String>,
    /// Print the adjacency list of FILE
    #[arg(long, requires = "file", conflicts_with = "source")]
    pub graph: bool,
    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Width of the route column, overrides the config file
    #[arg(long)]
    pub width: Option<usize>,
    /// TOML configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

/// What a single invocation asks for
#[derive(Debug, PartialEq, Eq)]
pub enum Query<'a> {
    Usage,
    Vertices(&'a Path),
    Graph(&'a Path),
    AllRoutes {
        file: &'a Path,
        source: &'a str,
    },
    OneRoute {
        file: &'a Path,
        source: &'a str,
        destination: &'a str,
    },
}

impl Cli {
    pub fn query(&self) -> Query<'_> {
        let Some(file) = self.file.as_deref() else {
            return Query::Usage;
        };
        match (self.source.as_deref(), self.destination.as_deref()) {
            (None, _) if self.graph => Query::Graph(file),
            (None, _) => Query::Vertices(file),
            (Some(source), None) => Query::AllRoutes { file, source },
            (Some(source), Some(destination)) => Query::OneRoute {
                file,
                source,
                destination,
            },
        }
    }
}
