//! Dense SSSP - Single-Source Shortest Path distances over dense cost matrices
//!
//! This library computes shortest-path distances from one source vertex to every
//! other vertex of a weighted directed graph stored as an N×N cost matrix.
//!
//! The computation is the classical O(N²) array-scan variant of Dijkstra's
//! algorithm and assumes non-negative edge weights. A zero cell in a
//! [`CostMatrix`] means "no edge"; use [`EdgeMatrix`] when zero-weight edges
//! must be kept.
//!
//! [`AtriaCentrality`] ranks the vertices of a signed matrix by how much
//! payoff they carry (the ATria centrality measure).
//!
//! ```
//! use dense_sssp::ShortestPathEngine;
//!
//! let engine = ShortestPathEngine::from_rows(vec![
//!     vec![0.0, 4.0, 1.0],
//!     vec![0.0, 0.0, 0.0],
//!     vec![0.0, 2.0, 0.0],
//! ])?;
//!
//! let distances = engine.distances_from(0)?;
//! assert_eq!(distances.as_slice(), &[0.0, 3.0, 1.0]);
//! # Ok::<(), dense_sssp::Error>(())
//! ```

pub mod algorithm;
pub mod graph;
pub mod plugin;
pub mod web;

pub use algorithm::{
    centrality::{AtriaCentrality, RankedVertex},
    dijkstra::DenseDijkstra,
    engine::ShortestPathEngine,
    DistanceVector, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{CostMatrix, EdgeMatrix, Graph};
pub use plugin::{AtriaPlugin, DijkstraPlugin, ShortestPathPlugin};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid graph: row {row} has {found} cells, expected {expected}")]
    InvalidGraph {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Expected {expected} vertex labels, got {found}")]
    LabelCount { expected: usize, found: usize },

    #[error("No graph loaded")]
    NotLoaded,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
