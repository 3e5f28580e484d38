mod shortest_paths;
mod state;

pub use shortest_paths::{PathState, ShortestPaths};
