pub mod dijkstra;
pub mod report;
