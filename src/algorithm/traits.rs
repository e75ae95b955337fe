use std::fmt::Debug;
use std::ops::Index;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Distances from one source vertex to every vertex of a graph.
///
/// Entry `v` is the shortest known cost from `source` to `v`, or positive
/// infinity if `v` was never reached.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceVector<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex ID
    source: usize,

    /// Distances from source to each vertex
    distances: Vec<W>,
}

impl<W> DistanceVector<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(source: usize, distances: Vec<W>) -> Self {
        DistanceVector { source, distances }
    }

    /// The vertex the distances were computed from
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `vertex`, `None` if the vertex is out of range
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if a path from the source to `vertex` was found
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).map_or(false, |d| d != W::infinity())
    }

    /// Number of vertices with a distance other than positive infinity
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != W::infinity()).count()
    }

    pub fn as_slice(&self) -> &[W] {
        &self.distances
    }

    /// Iterates `(vertex, distance)` pairs in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (usize, W)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    pub fn into_vec(self) -> Vec<W> {
        self.distances
    }
}

impl<W> Index<usize> for DistanceVector<W>
where
    W: Float + Zero + Debug + Copy,
{
    type Output = W;

    fn index(&self, vertex: usize) -> &W {
        &self.distances[vertex]
    }
}

impl<W> From<DistanceVector<W>> for Vec<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn from(distances: DistanceVector<W>) -> Self {
        distances.into_vec()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute distances from a source vertex to all vertices
    fn compute_distances(&self, graph: &G, source: usize) -> Result<DistanceVector<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
