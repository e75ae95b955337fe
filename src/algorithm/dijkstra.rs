use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear scan for the next vertex instead of a heap.
///
/// Runs in O(N²) regardless of edge count, which suits dense matrices. Edge
/// weights must be non-negative for the result to be a true shortest-path
/// distance; this is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenseDijkstra;

impl DenseDijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        DenseDijkstra
    }
}

/// Picks the unprocessed vertex with the smallest distance.
///
/// Scans in index order and replaces the best candidate on `<=`, so among equal
/// distances the last one seen wins.
#[inline]
fn min_distance<W>(distances: &[W], processed: &[bool]) -> usize
where
    W: Float + Zero + Debug + Copy,
{
    let mut min = W::infinity();
    let mut index = 0;

    for (v, &distance) in distances.iter().enumerate() {
        if !processed[v] && distance <= min {
            min = distance;
            index = v;
        }
    }

    index
}

impl<W, G> ShortestPathAlgorithm<W, G> for DenseDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DenseDijkstra"
    }

    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceVector<W>> {
        let n = graph.vertex_count();

        // Nothing to reach in an empty graph, whatever the source.
        if n == 0 {
            return Ok(DistanceVector::new(source, Vec::new()));
        }

        if !graph.has_vertex(source) {
            return Err(Error::OutOfRange {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances = vec![W::infinity(); n];
        let mut processed = vec![false; n];

        distances[source] = W::zero();

        for _ in 0..n - 1 {
            let u = min_distance(&distances, &processed);
            processed[u] = true;

            let dist_u = distances[u];
            if !dist_u.is_finite() {
                continue;
            }

            // Relax every edge u -> v into the unprocessed set
            for v in 0..n {
                if processed[v] {
                    continue;
                }
                if let Some(weight) = graph.edge_weight(u, v) {
                    let new_dist = dist_u + weight;
                    if new_dist < distances[v] {
                        distances[v] = new_dist;
                    }
                }
            }
        }

        Ok(DistanceVector::new(source, distances))
    }
}
