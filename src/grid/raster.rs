//! 2D raster fields aligned with an observation grid.
//!
//! A [`RasterField2D`] holds one scalar per grid sample, row-major, with the
//! same shape and indexing as the [`crate::grid::ObservationGrid`] it was
//! built against. Ground-surface elevation, initial head, and the evolving
//! water-table surface are all stored this way.

use crate::grid::membership::CellSelection;

/// A 2D scalar field with the same shape and indexing as its grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterField2D {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl RasterField2D {
    /// Create a field of zeros with the given shape.
    pub fn zeros(shape: (usize, usize)) -> Self {
        Self {
            nx: shape.0,
            ny: shape.1,
            data: vec![0.0; shape.0 * shape.1],
        }
    }

    /// Create a field filled with a constant value.
    pub fn filled(shape: (usize, usize), value: f64) -> Self {
        Self {
            nx: shape.0,
            ny: shape.1,
            data: vec![value; shape.0 * shape.1],
        }
    }

    /// Create a field from row-major data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != nx * ny`.
    pub fn from_vec(shape: (usize, usize), data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            shape.0 * shape.1,
            "Field data has wrong length for shape"
        );
        Self {
            nx: shape.0,
            ny: shape.1,
            data,
        }
    }

    /// Field shape as (nx, ny).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the field has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at flat index `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> f64 {
        self.data[idx]
    }

    /// Set the value at flat index `idx`.
    #[inline]
    pub fn set(&mut self, idx: usize, value: f64) {
        self.data[idx] = value;
    }

    /// Value at column `i`, row `j`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[j * self.nx + i]
    }

    /// Raw row-major values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major values.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Elementwise add another field into this one.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn add_assign(&mut self, other: &Self) {
        assert_eq!(self.shape(), other.shape(), "Field shape mismatch");
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
    }

    /// Elementwise difference `self - other` as a new field.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Self {
        assert_eq!(self.shape(), other.shape(), "Field shape mismatch");
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Self {
            nx: self.nx,
            ny: self.ny,
            data,
        }
    }

    /// Maximum over all finite cell values, or `None` if no cell is finite.
    pub fn max_finite(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// Minimum over all finite cell values, or `None` if no cell is finite.
    pub fn min_finite(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.min(v))))
    }

    /// Extract the values covered by a cell selection, in index order.
    ///
    /// # Panics
    ///
    /// Panics if the selection was built against a different shape.
    pub fn values_at(&self, cells: &CellSelection) -> Vec<f64> {
        assert_eq!(
            self.shape(),
            cells.shape(),
            "Selection shape does not match field"
        );
        cells.indices().iter().map(|&idx| self.data[idx]).collect()
    }
}
