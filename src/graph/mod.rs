// weighted adjacency-list graph
mod shortest_path;
mod weighted;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use shortest_path::ShortestPath;
pub use weighted::WeightedGraph;
