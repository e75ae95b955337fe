use std::fmt::Debug;
use std::marker::PhantomData;
use num_traits::{Float, Zero};

use crate::algorithm::{DenseDijkstra, DistanceVector, ShortestPathAlgorithm};
use crate::graph::{CostMatrix, Graph};
use crate::Result;

/// Owns an immutable graph snapshot and answers single-source distance queries.
///
/// Every call to [`distances_from`](Self::distances_from) works on its own
/// buffers, so one engine can serve any number of sources, from any number of
/// threads, without changing.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<W, G = CostMatrix<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: G,
    algorithm: DenseDijkstra,
    _weight: PhantomData<W>,
}

impl<W> ShortestPathEngine<W, CostMatrix<W>>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds an engine over a cost matrix given as rows.
    ///
    /// Fails with [`Error::InvalidGraph`](crate::Error::InvalidGraph) if the
    /// rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        Ok(Self::new(CostMatrix::from_rows(rows)?))
    }
}

impl<W, G> ShortestPathEngine<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates an engine that takes ownership of `graph`
    pub fn new(graph: G) -> Self {
        ShortestPathEngine {
            graph,
            algorithm: DenseDijkstra::new(),
            _weight: PhantomData,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Computes the distance from `source` to every vertex.
    ///
    /// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) if `source`
    /// is not a vertex of a non-empty graph.
    pub fn distances_from(&self, source: usize) -> Result<DistanceVector<W>> {
        self.algorithm.compute_distances(&self.graph, source)
    }

    /// Distances from every source in turn; entry `s` is `distances_from(s)`.
    pub fn distance_table(&self) -> Result<Vec<DistanceVector<W>>> {
        (0..self.vertex_count())
            .map(|source| self.distances_from(source))
            .collect()
    }
}
