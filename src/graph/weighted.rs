// weighted.rs
// ──────────────────────────────────────────────────────────────────────────────
// Undirected weighted graph stored as per-vertex adjacency lists.  Every
// `add_edge` records the edge in both endpoint lists, in call order, and
// parallel edges are kept.  There is no removal.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// An undirected graph whose edges carry a real-valued weight.
///
/// Vertices only need equality and hashing.  Neighbour lists preserve the
/// order in which edges were added, which fixes the order of depth-first
/// traversal.
#[derive(Clone, Debug)]
pub struct WeightedGraph<V> {
    pub(super) vertices: HashSet<V>,
    pub(super) adjacency: HashMap<V, Vec<(V, f64)>>,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `vertex` if it is not already known. Calling it again is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex);
    }

    /// Adds an undirected edge between `u` and `v` with the given weight.
    ///
    /// Both endpoints become known vertices.  A self-loop appears twice in
    /// its vertex's list.  Negative weights are stored as given; shortest
    /// path results are only meaningful for non-negative weights.
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) {
        self.adjacency
            .entry(u.clone())
            .or_default()
            .push((v.clone(), weight));
        self.adjacency
            .entry(v.clone())
            .or_default()
            .push((u.clone(), weight));
        self.add_vertex(u);
        self.add_vertex(v);
    }

    /// Adds an edge with the default weight of 1.
    pub fn add_unit_edge(&mut self, u: V, v: V) {
        self.add_edge(u, v, 1.0);
    }

    /// Returns the `(neighbour, weight)` pairs recorded for `vertex`, in the
    /// order the edges were added. Unknown vertices have no neighbours.
    pub fn neighbors(&self, vertex: &V) -> &[(V, f64)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Depth-first pre-order of every vertex reachable from `start`.
    pub fn depth_first(&self, start: &V) -> Vec<V> {
        let mut visited = HashSet::new();
        self.depth_first_with(start, &mut visited)
    }

    /// Depth-first traversal that shares `visited` with the caller.
    ///
    /// Vertices already in `visited` are neither reported nor expanded, so
    /// repeated calls over the same set enumerate connected components one
    /// at a time.  Returns an empty sequence when `start` is unknown or was
    /// already visited.
    ///
    /// The order is the one a recursive walk over the neighbour lists would
    /// produce; an explicit stack keeps the call depth constant.
    pub fn depth_first_with(&self, start: &V, visited: &mut HashSet<V>) -> Vec<V> {
        let mut order = Vec::new();
        if !self.vertices.contains(start) || visited.contains(start) {
            return order;
        }

        let mut stack: Vec<V> = vec![start.clone()];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            // Push in reverse so the first-added edge is explored first.
            for (neighbor, _) in self.neighbors(&current).iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
            order.push(current);
        }
        order
    }
}
