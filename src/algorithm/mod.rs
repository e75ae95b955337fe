pub mod traits;
pub mod dijkstra;
pub mod engine;
pub mod centrality;

pub use traits::{DistanceVector, ShortestPathAlgorithm};
pub use dijkstra::DenseDijkstra;
pub use engine::ShortestPathEngine;
pub use centrality::{AtriaCentrality, RankedVertex};
