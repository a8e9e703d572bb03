//! Single-source shortest path (Dijkstra) over a [`WeightedGraph`].
//!
//! The priority queue is a `BinaryHeap` without decrease-key, so improved
//! distances are pushed as new entries and outdated ones are skipped when
//! popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use super::weighted::WeightedGraph;

/// A path found by [`WeightedGraph::shortest_path_with_cost`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath<V> {
    /// Vertices from start to end, both included.
    pub path: Vec<V>,
    /// Sum of the edge weights along `path`.
    pub cost: f64,
}

/// Entry in the Dijkstra frontier.
///
/// Ordering is reversed so the max-heap pops the smallest distance first;
/// equal distances pop in insertion order.
#[derive(Debug)]
struct QueueEntry<V> {
    vertex: V,
    distance: f64,
    sequence: usize,
}

impl<V> PartialEq for QueueEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for QueueEntry<V> {}

impl<V> PartialOrd for QueueEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for QueueEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN sinks to the bottom of the heap
        let by_distance = match (self.distance.is_nan(), other.distance.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => other
                .distance
                .partial_cmp(&self.distance)
                .unwrap_or(Ordering::Equal),
        };
        by_distance.then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V: Clone + Eq + Hash> WeightedGraph<V> {
    /// Returns the cheapest path from `start` to `end`.
    ///
    /// The result is `[start]` when both ends are equal, known or not, and
    /// empty when `end` cannot be reached (including unknown endpoints).
    pub fn shortest_path(&self, start: &V, end: &V) -> Vec<V> {
        self.shortest_path_with_cost(start, end)
            .map(|found| found.path)
            .unwrap_or_default()
    }

    /// Like [`shortest_path`](Self::shortest_path) but also reports the total
    /// weight. Returns `None` when no path exists.
    ///
    /// Weights must be non-negative for the result to be optimal.
    pub fn shortest_path_with_cost(&self, start: &V, end: &V) -> Option<ShortestPath<V>> {
        if start == end {
            return Some(ShortestPath {
                path: vec![start.clone()],
                cost: 0.0,
            });
        }

        let mut distances: HashMap<V, f64> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), f64::INFINITY))
            .collect();
        distances.insert(start.clone(), 0.0);

        let mut predecessors: HashMap<V, V> = HashMap::new();
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0usize;
        frontier.push(QueueEntry {
            vertex: start.clone(),
            distance: 0.0,
            sequence,
        });

        while let Some(QueueEntry {
            vertex, distance, ..
        }) = frontier.pop()
        {
            if &vertex == end {
                break;
            }
            let best = distances.get(&vertex).copied().unwrap_or(f64::INFINITY);
            if distance > best {
                continue; // stale entry
            }

            for (neighbor, weight) in self.neighbors(&vertex) {
                let candidate = distance + weight;
                let known = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), vertex.clone());
                    sequence += 1;
                    frontier.push(QueueEntry {
                        vertex: neighbor.clone(),
                        distance: candidate,
                        sequence,
                    });
                }
            }
        }

        if !predecessors.contains_key(end) {
            return None;
        }
        let cost = distances.get(end).copied().unwrap_or(f64::INFINITY);

        let mut path = vec![end.clone()];
        let mut current = end;
        while current != start {
            match predecessors.get(current) {
                Some(previous) => {
                    path.push(previous.clone());
                    current = previous;
                }
                None => break,
            }
            // Negative weights can make the predecessor chain cyclic.
            if path.len() > predecessors.len() + 1 {
                break;
            }
        }
        path.reverse();

        Some(ShortestPath { path, cost })
    }
}
