//! Ablatio Triadum (ATria) centrality over signed, weighted networks.
//!
//! Every vertex `v` is split into a positive half `2v` and a negative half
//! `2v + 1`. A positive edge `u -> v` links the like halves, a negative edge
//! links the opposite halves, so a path's sign is the parity of the halves it
//! joins. Each round runs a max/min product closure over the split graph,
//! scores every vertex by the net payoff it can reach, records the vertex
//! with the largest magnitude and removes the triads it takes part in.

use std::fmt::Debug;

use log::{debug, info};
use num_traits::{Float, Zero};

use crate::graph::CostMatrix;
use crate::{Error, Result};

#[inline]
fn cell_offset(row: usize, column: usize, size: usize) -> usize {
    row * size + column
}

/// Ranks the vertices of a signed cost matrix by ATria centrality
#[derive(Debug, Clone)]
pub struct AtriaCentrality<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the input network
    vertex_count: usize,
    /// The split 2N x 2N graph, row-major
    split: Vec<W>,
}

impl<W> AtriaCentrality<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the split graph. Zero cells are not edges and the diagonal is
    /// ignored; every half reaches itself with payoff one.
    pub fn new(matrix: &CostMatrix<W>) -> Self {
        let n = matrix.size();
        let size = 2 * n;
        let mut split = vec![W::zero(); size * size];

        for u in 0..n {
            split[cell_offset(2 * u, 2 * u, size)] = W::one();
            split[cell_offset(2 * u + 1, 2 * u + 1, size)] = W::one();

            for v in (0..n).filter(|&v| v != u) {
                let weight = match matrix.cost(u, v) {
                    Some(weight) if !weight.is_zero() => weight,
                    _ => continue,
                };
                if weight > W::zero() {
                    split[cell_offset(2 * u, 2 * v, size)] = weight;
                    split[cell_offset(2 * u + 1, 2 * v + 1, size)] = weight;
                } else {
                    split[cell_offset(2 * u, 2 * v + 1, size)] = weight;
                    split[cell_offset(2 * u + 1, 2 * v, size)] = weight;
                }
            }
        }

        AtriaCentrality {
            vertex_count: n,
            split,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Runs the ablation rounds and returns one centrality per vertex.
    ///
    /// Vertices never selected before every payoff drops to zero keep a
    /// centrality of zero.
    pub fn centrality(&self) -> Vec<W> {
        let n = self.vertex_count;
        let mut graph = self.split.clone();
        let mut centrality = vec![W::zero(); n];

        info!("Running ATria over {} vertices", n);

        for round in 0..n {
            let payoffs = payoffs(&graph, n);

            // First vertex with the largest magnitude wins
            let mut best = 0;
            for (vertex, pay) in payoffs.iter().enumerate().skip(1) {
                if pay.abs() > payoffs[best].abs() {
                    best = vertex;
                }
            }

            if payoffs[best].is_zero() {
                debug!("Every payoff is zero after {} rounds", round);
                break;
            }

            debug!("Round {}: vertex {} with payoff {:?}", round, best, payoffs[best]);
            centrality[best] = payoffs[best];
            ablate(&mut graph, n, best);
        }

        centrality
    }

    /// Centrality of every vertex, most central first.
    ///
    /// `labels` names the vertices in index order. Ties keep index order.
    pub fn ranking(&self, labels: &[String]) -> Result<Vec<RankedVertex<W>>> {
        if labels.len() != self.vertex_count {
            return Err(Error::LabelCount {
                expected: self.vertex_count,
                found: labels.len(),
            });
        }

        let mut ranked: Vec<(usize, W)> = self.centrality().into_iter().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.abs()
                .partial_cmp(&a.1.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total = ranked.len();
        Ok(ranked
            .into_iter()
            .enumerate()
            .map(|(position, (vertex, centrality))| RankedVertex {
                vertex,
                label: labels[vertex].clone(),
                centrality,
                rank: total - position,
            })
            .collect())
    }
}

/// One line of a centrality ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVertex<W> {
    pub vertex: usize,
    pub label: String,
    /// Signed centrality; its magnitude orders the ranking
    pub centrality: W,
    /// `vertex_count` for the most central vertex, down to 1
    pub rank: usize,
}

/// Net payoff of each vertex after a max/min product closure of `graph`.
///
/// Paths between like halves keep their largest product, paths between
/// opposite halves their smallest.
fn payoffs<W>(graph: &[W], n: usize) -> Vec<W>
where
    W: Float + Zero + Debug + Copy,
{
    let size = 2 * n;
    let mut closure = graph.to_vec();

    for k in 0..size {
        for i in 0..size {
            for j in 0..size {
                if i == j || i == k || j == k {
                    continue;
                }
                let current = closure[cell_offset(i, j, size)];
                let through = closure[cell_offset(i, k, size)] * closure[cell_offset(k, j, size)];
                let improves = if (i + j) % 2 == 0 {
                    through > current
                } else {
                    through < current
                };
                if improves {
                    closure[cell_offset(i, j, size)] = through;
                }
            }
        }
    }

    (0..n)
        .map(|v| {
            let start = cell_offset(2 * v, 0, size);
            closure[start..start + size]
                .iter()
                .fold(W::zero(), |sum, &pay| sum + pay)
                - W::one()
        })
        .collect()
}

/// Removes every edge between two neighbours of `vertex`, then the edges of
/// `vertex` itself. Self-loops of the halves are kept.
fn ablate<W>(graph: &mut [W], n: usize, vertex: usize)
where
    W: Float + Zero + Debug + Copy,
{
    let size = 2 * n;
    let (plus, minus) = (2 * vertex, 2 * vertex + 1);

    let neighbours: Vec<usize> = (0..size)
        .filter(|&i| i / 2 != vertex)
        .filter(|&i| {
            !graph[cell_offset(plus, i, size)].is_zero()
                || !graph[cell_offset(minus, i, size)].is_zero()
        })
        .collect();

    for &i in &neighbours {
        for &j in neighbours.iter().filter(|&&j| j != i) {
            graph[cell_offset(i, j, size)] = W::zero();
            graph[cell_offset(j, i, size)] = W::zero();
        }
    }

    for i in (0..size).filter(|&i| i / 2 != vertex) {
        for half in [plus, minus] {
            graph[cell_offset(half, i, size)] = W::zero();
            graph[cell_offset(i, half, size)] = W::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_graph_layout() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 0.5], vec![-0.25, 0.0]]).unwrap();
        let atria = AtriaCentrality::new(&matrix);

        let expected = vec![
            1.0, 0.0, 0.5, 0.0, // 0+
            0.0, 1.0, 0.0, 0.5, // 0-
            0.0, -0.25, 1.0, 0.0, // 1+
            -0.25, 0.0, 0.0, 1.0, // 1-
        ];
        assert_eq!(atria.split, expected);
    }

    #[test]
    fn test_payoffs_of_a_chain() {
        // 0 - 1 - 2, every edge 0.5 both ways
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.5],
            vec![0.0, 0.5, 0.0],
        ])
        .unwrap();
        let atria = AtriaCentrality::new(&matrix);

        assert_eq!(payoffs(&atria.split, 3), vec![0.75, 1.0, 0.75]);
    }

    #[test]
    fn test_ablation_isolates_the_vertex() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.5],
            vec![0.0, 0.5, 0.0],
        ])
        .unwrap();
        let mut graph = AtriaCentrality::new(&matrix).split;
        ablate(&mut graph, 3, 1);

        for (offset, &cell) in graph.iter().enumerate() {
            let (i, j) = (offset / 6, offset % 6);
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(cell, expected, "cell ({}, {})", i, j);
        }
    }
}
