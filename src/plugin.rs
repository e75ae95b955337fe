//! Plugin-style front ends to the engine and to the centrality ranking.
//!
//! A host drives a plugin in three steps: hand it a cost matrix, ask it for
//! a result, and have it write that result somewhere.

use std::fmt::{Debug, Display};
use std::io::Write;

use log::{debug, info};
use num_traits::{Float, Zero};

use crate::algorithm::{AtriaCentrality, DistanceVector, RankedVertex, ShortestPathEngine};
use crate::graph::CostMatrix;
use crate::{Error, Result};

/// Load / run / emit interface for hosts that embed a shortest-path engine
pub trait ShortestPathPlugin<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Replaces the current graph with `matrix`
    fn load(&mut self, matrix: CostMatrix<W>) -> Result<()>;

    /// Computes distances from `source` over the loaded graph
    fn run(&self, source: usize) -> Result<DistanceVector<W>>;

    /// Writes `distances` to `sink`
    fn emit(&self, distances: &DistanceVector<W>, sink: &mut dyn Write) -> Result<()>;
}

/// [`ShortestPathPlugin`] backed by a [`ShortestPathEngine`].
///
/// `emit` writes a tab-separated table with a `Vertex\t\tDistance` header and
/// one `vertex\t\tdistance` line per vertex. Unreached vertices print `inf`.
#[derive(Debug)]
pub struct DijkstraPlugin<W>
where
    W: Float + Zero + Debug + Copy,
{
    engine: Option<ShortestPathEngine<W>>,
}

impl<W> Default for DijkstraPlugin<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        DijkstraPlugin { engine: None }
    }
}

impl<W> DijkstraPlugin<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine built by the last `load`, if any
    pub fn engine(&self) -> Option<&ShortestPathEngine<W>> {
        self.engine.as_ref()
    }
}

impl<W> ShortestPathPlugin<W> for DijkstraPlugin<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    fn load(&mut self, matrix: CostMatrix<W>) -> Result<()> {
        info!("Loading {0}x{0} cost matrix", matrix.size());
        self.engine = Some(ShortestPathEngine::new(matrix));
        Ok(())
    }

    fn run(&self, source: usize) -> Result<DistanceVector<W>> {
        let engine = self.engine.as_ref().ok_or(Error::NotLoaded)?;
        let distances = engine.distances_from(source)?;
        debug!(
            "Source {}: {} of {} vertices reachable",
            source,
            distances.reachable_count(),
            distances.len()
        );
        Ok(distances)
    }

    fn emit(&self, distances: &DistanceVector<W>, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "Vertex\t\tDistance")?;
        for (vertex, distance) in distances.iter() {
            writeln!(sink, "{}\t\t{}", vertex, distance)?;
        }
        sink.flush()?;
        Ok(())
    }
}

/// ATria centrality host.
///
/// `emit` writes a Cytoscape node attribute (NOA) table: a
/// `Name\tCentrality\tRank` header, then one line per vertex, most central
/// first, with the centrality magnitude.
#[derive(Debug)]
pub struct AtriaPlugin<W>
where
    W: Float + Zero + Debug + Copy,
{
    atria: Option<AtriaCentrality<W>>,
    labels: Vec<String>,
}

impl<W> Default for AtriaPlugin<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        AtriaPlugin {
            atria: None,
            labels: Vec::new(),
        }
    }
}

impl<W> AtriaPlugin<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current network; vertices are named by their index
    pub fn load(&mut self, matrix: CostMatrix<W>) -> Result<()> {
        let labels = (0..matrix.size()).map(|v| v.to_string()).collect();
        self.load_labelled(matrix, labels)
    }

    /// Replaces the current network, naming vertex `v` by `labels[v]`
    pub fn load_labelled(&mut self, matrix: CostMatrix<W>, labels: Vec<String>) -> Result<()> {
        if labels.len() != matrix.size() {
            return Err(Error::LabelCount {
                expected: matrix.size(),
                found: labels.len(),
            });
        }
        info!("Loading {0}x{0} signed network", matrix.size());
        self.atria = Some(AtriaCentrality::new(&matrix));
        self.labels = labels;
        Ok(())
    }

    /// Ranks the loaded network
    pub fn run(&self) -> Result<Vec<RankedVertex<W>>> {
        let atria = self.atria.as_ref().ok_or(Error::NotLoaded)?;
        atria.ranking(&self.labels)
    }

    pub fn emit(&self, ranking: &[RankedVertex<W>], sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "Name\tCentrality\tRank")?;
        for vertex in ranking {
            writeln!(
                sink,
                "{}\t{}\t\t{}",
                vertex.label,
                vertex.centrality.abs(),
                vertex.rank
            )?;
        }
        sink.flush()?;
        Ok(())
    }
}
