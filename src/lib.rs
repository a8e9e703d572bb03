//! In-memory data structures: a weighted undirected graph with depth-first
//! traversal and Dijkstra shortest paths, an arena-backed binary search
//! tree, a cursor-based string scanner, a counted key/value store with
//! dotted-path lookup over nested documents, and a few numeric helpers.
//!
//! The `app` module wraps them in a small command-line front end.

pub mod app;
pub mod dict;
pub mod graph;
pub mod numeric;
pub mod scanner;
pub mod tree;
