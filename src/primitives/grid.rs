//! Grid type for dense 2D raster data.

use crate::element::Element;
use crate::error::{Result, TramaError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// A dense 2D grid of halftone cells (row-major storage).
///
/// The element kind `T` decides the arithmetic: logical OR/AND for
/// booleans, real arithmetic for floats, saturating arithmetic for
/// fixed-width signed integers. Both dimensions are strictly positive
/// for the lifetime of the grid and the buffer always holds exactly
/// `width * height` cells.
///
/// # Examples
///
/// ```
/// use trama::primitives::Grid;
///
/// let g = Grid::<i16>::new(5, 7).expect("positive dimensions");
/// assert_eq!(g.shape(), (5, 7));
/// assert_eq!(g.get(6, 4).expect("in bounds"), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Element> Grid<T> {
    /// Creates a grid with every cell set to the kind's zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            cells: vec![T::zero(); width * height],
            width,
            height,
        })
    }

    /// Creates a grid filled from a kind-appropriate uniform draw:
    /// a fair coin for booleans, `[0, 1)` for floats, the full
    /// representable range for integers.
    ///
    /// Passing the same seed reproduces the same grid; `None` draws
    /// from entropy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero.
    pub fn random(width: usize, height: usize, seed: Option<u64>) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let cells = (0..width * height).map(|_| T::sample(&mut rng)).collect();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Creates a grid from a row-major vector of cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero, or
    /// `DimensionMismatch` if the cell count doesn't equal
    /// `width * height`.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(TramaError::DimensionMismatch {
                expected: format!("{} cells ({width}x{height})", width * height),
                actual: format!("{} cells", cells.len()),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the shape as (width, height).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid never holds zero cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `row >= height` or `col >= width`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    /// Returns a mutable handle to the cell at (row, col); assignment
    /// through it is immediately visible to subsequent reads.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `row >= height` or `col >= width`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Sets the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `row >= height` or `col >= width`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns the underlying cells as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterates the cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(TramaError::IndexOutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    // Zero-padded read used by the broadcasting add.
    fn cell_or_zero(&self, row: usize, col: usize) -> T {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            T::zero()
        }
    }

    /// Combines every cell with a scalar under the kind's add rule
    /// (logical OR for booleans, saturating sum for integers).
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        Self {
            cells: self.cells.iter().map(|c| c.combine_add(scalar)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Combines every cell with a scalar under the kind's multiply rule
    /// (logical AND for booleans, wide-then-clamped product for
    /// integers).
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        Self {
            cells: self.cells.iter().map(|c| c.combine_mul(scalar)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Adds another grid element-wise.
    ///
    /// Shapes need not match: the result spans the pairwise maximum of
    /// the two extents, and a cell outside one operand's extent
    /// contributes that kind's zero.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let width = self.width.max(other.width);
        let height = self.height.max(other.height);
        let mut out = Self {
            cells: vec![T::zero(); width * height],
            width,
            height,
        };
        for row in 0..height {
            for col in 0..width {
                out.cells[row * width + col] = self
                    .cell_or_zero(row, col)
                    .combine_add(other.cell_or_zero(row, col));
            }
        }
        out
    }

    /// Multiplies another grid element-wise. Unlike [`Grid::add`] there
    /// is no broadcasting.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(TramaError::DimensionMismatch {
                expected: format!("{}x{}", self.width, self.height),
                actual: format!("{}x{}", other.width, other.height),
            });
        }
        let cells = self
            .cells
            .iter()
            .zip(other.cells.iter())
            .map(|(a, b)| a.combine_mul(*b))
            .collect();
        Ok(Self {
            cells,
            width: self.width,
            height: self.height,
        })
    }

    /// Inverts every cell: logical NOT for booleans, arithmetic
    /// negation otherwise.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|c| c.negate()).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Ratio of the cell-value sum to the theoretical maximum sum, in
    /// `[0, 1]`. Accumulates in `f64` so near-maximum integer cells
    /// never overflow an intermediate.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_factor(&self) -> f64 {
        let ceiling = self.cells.len() as f64 * T::max_value().as_f64();
        if ceiling == 0.0 {
            return 0.0;
        }
        let sum: f64 = self.cells.iter().map(|c| c.as_f64()).sum();
        sum / ceiling
    }
}

/// Equality under the kind's rule: grids of differing shape are never
/// equal; floating-point cells compare within [`Element::PRECISION`].
impl<T: Element> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Element> Not for &Grid<T> {
    type Output = Grid<T>;

    fn not(self) -> Grid<T> {
        self.invert()
    }
}

impl<T: Element> Not for Grid<T> {
    type Output = Grid<T>;

    fn not(self) -> Grid<T> {
        self.invert()
    }
}

impl<'a, T: Element> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Debug dump: one row per line, cells space-separated in their natural
/// textual form. Not a persistence format.
impl<T: Element + fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * self.width + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(TramaError::InvalidDimension { width, height });
    }
    Ok(())
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_grid_contract.rs"]
mod contract;

#[cfg(test)]
#[path = "grid_proptests.rs"]
mod proptests;
