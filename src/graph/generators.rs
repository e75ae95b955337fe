use crate::graph::CostMatrix;
use rand::Rng;

/// Generates a random cost matrix with `n` vertices.
///
/// Each off-diagonal cell is an edge with probability `density`, weighted with a
/// whole number in `1..=max_weight`. All other cells are zero (no edge).
/// `density` is clamped to `[0, 1]`; NaN counts as zero.
pub fn random_cost_matrix<R: Rng>(
    n: usize,
    density: f64,
    max_weight: u32,
    rng: &mut R,
) -> CostMatrix<f64> {
    // `clamp` passes NaN through unchanged
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let max_weight = max_weight.max(1);
    let mut cells = vec![0.0; n * n];

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(density) {
                cells[u * n + v] = f64::from(rng.gen_range(1..=max_weight));
            }
        }
    }

    CostMatrix::from_square_cells(n, cells)
}

/// Generates a `width` x `height` grid where every cell is connected to its
/// four neighbours with unit cost. Vertex `(x, y)` has index `y * width + x`.
pub fn grid_cost_matrix(width: usize, height: usize) -> CostMatrix<f64> {
    let n = width * height;
    let mut cells = vec![0.0; n * n];

    // Helper function to get vertex index from 2D coordinates
    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x > 0 {
                cells[current * n + get_index(x - 1, y)] = 1.0;
            }
            if x + 1 < width {
                cells[current * n + get_index(x + 1, y)] = 1.0;
            }
            if y > 0 {
                cells[current * n + get_index(x, y - 1)] = 1.0;
            }
            if y + 1 < height {
                cells[current * n + get_index(x, y + 1)] = 1.0;
            }
        }
    }

    CostMatrix::from_square_cells(n, cells)
}
