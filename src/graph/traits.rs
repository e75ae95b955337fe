use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph with vertices `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Returns an iterator over the outgoing edges from a vertex, in target order
    fn outgoing_edges<'a>(&'a self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + 'a>
    where
        W: 'a,
    {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (0..self.vertex_count())
                .filter_map(move |to| self.edge_weight(vertex, to).map(|weight| (to, weight))),
        )
    }
}
