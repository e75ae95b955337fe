use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Calculate the offset of cell `(row, column)` in a row-major square matrix.
#[inline]
fn cell_offset(row: usize, column: usize, size: usize) -> usize {
    row * size + column
}

/// Flattens `rows` into row-major storage, rejecting any row whose length
/// differs from the number of rows.
fn flatten_square<T>(rows: Vec<Vec<T>>) -> Result<(usize, Vec<T>)> {
    let size = rows.len();
    let mut cells = Vec::with_capacity(size * size);

    for (row, values) in rows.into_iter().enumerate() {
        if values.len() != size {
            return Err(Error::InvalidGraph {
                row,
                expected: size,
                found: values.len(),
            });
        }
        cells.extend(values);
    }

    Ok((size, cells))
}

/// Checks that a flat buffer holds exactly `size * size` cells.
fn check_flat<T>(size: usize, cells: &[T]) -> Result<()> {
    match size.checked_mul(size) {
        Some(expected) if cells.len() == expected => return Ok(()),
        Some(_) => {}
        // No buffer can be that large, so the first row is already short.
        None => {
            return Err(Error::InvalidGraph {
                row: 0,
                expected: size,
                found: cells.len().min(size),
            })
        }
    }

    // Report the first incomplete (or first overflowing) row.
    let row = (cells.len() / size.max(1)).min(size);
    let found = cells.len().saturating_sub(row * size);
    Err(Error::InvalidGraph {
        row,
        expected: size,
        found,
    })
}

/// A dense N×N cost matrix where `cost(u, v)` is the direct cost of `u -> v`.
///
/// A zero cell means there is no edge between the two vertices, so a true
/// zero-weight edge cannot be expressed here; see [`EdgeMatrix`] for that.
/// Infinite cells are kept as edges that can never improve a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    size: usize,
    cells: Vec<W>,
}

impl<W> CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a matrix from its rows. Every row must have one cell per row.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let (size, cells) = flatten_square(rows)?;
        Ok(CostMatrix { size, cells })
    }

    /// Builds a matrix from `size * size` cells in row-major order.
    pub fn from_flat(size: usize, cells: Vec<W>) -> Result<Self> {
        check_flat(size, &cells)?;
        Ok(CostMatrix { size, cells })
    }

    /// Wraps a buffer the caller built as exactly `size * size` cells.
    pub(crate) fn from_square_cells(size: usize, cells: Vec<W>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        CostMatrix { size, cells }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw cell value, including zero cells. `None` if out of bounds.
    pub fn cost(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.cells[cell_offset(from, to, self.size)])
    }

    /// The raw cells of one row
    pub fn row(&self, row: usize) -> Option<&[W]> {
        if row >= self.size {
            return None;
        }
        let start = cell_offset(row, 0, self.size);
        Some(&self.cells[start..start + self.size])
    }

    /// Copies the matrix back out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}

impl<W> TryFrom<Vec<Vec<W>>> for CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    type Error = Error;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self> {
        CostMatrix::from_rows(rows)
    }
}

impl<W> Graph<W> for CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cost| !cost.is_zero()).count()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.cost(from, to).filter(|cost| !cost.is_zero())
    }
}

/// A dense N×N matrix with an explicit present/absent marker per cell.
///
/// Unlike [`CostMatrix`], `Some(0)` is a real zero-weight edge and only
/// `None` means the edge is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    size: usize,
    cells: Vec<Option<W>>,
}

impl<W> EdgeMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a matrix from its rows. Every row must have one cell per row.
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        let (size, cells) = flatten_square(rows)?;
        Ok(EdgeMatrix { size, cells })
    }

    /// Builds a matrix from `size * size` cells in row-major order.
    pub fn from_flat(size: usize, cells: Vec<Option<W>>) -> Result<Self> {
        check_flat(size, &cells)?;
        Ok(EdgeMatrix { size, cells })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Copies the matrix back out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<Option<W>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}

impl<W> TryFrom<Vec<Vec<Option<W>>>> for EdgeMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    type Error = Error;

    fn try_from(rows: Vec<Vec<Option<W>>>) -> Result<Self> {
        EdgeMatrix::from_rows(rows)
    }
}

impl<W> From<CostMatrix<W>> for EdgeMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Marks every zero cell as absent, keeping the cost-matrix meaning.
    fn from(matrix: CostMatrix<W>) -> Self {
        let cells = matrix
            .cells
            .into_iter()
            .map(|cost| if cost.is_zero() { None } else { Some(cost) })
            .collect();
        EdgeMatrix {
            size: matrix.size,
            cells,
        }
    }
}

impl<W> Graph<W> for EdgeMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.cells[cell_offset(from, to, self.size)]
    }
}
