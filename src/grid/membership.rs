//! Polygon-grid membership.
//!
//! Determines which grid samples fall inside a map polygon. The polygon
//! bounding box prunes the candidate set before the exact point-in-polygon
//! test, so large grids only pay for the cells near the polygon.
//!
//! An empty result is an error, not an empty selection: a polygon that
//! covers no grid cell indicates a misconfigured geometry or grid upstream,
//! and the risk classifier must never run a percentile over an empty
//! selection.

use std::fmt;

use geo::{BoundingRect, Contains, Point, Polygon};
use thiserror::Error;

use crate::grid::ObservationGrid;

/// Error type for membership queries.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// The polygon covers no grid cell.
    #[error("Polygon {name:?} contains no grid cells")]
    NoCellsInside {
        /// Polygon name, if one was supplied
        name: String,
    },

    /// The polygon has no computable bounding box (empty geometry).
    #[error("Polygon {name:?} has an empty geometry")]
    EmptyGeometry { name: String },
}

/// The set of grid cells covered by one polygon.
///
/// Holds both the flat indices (for value extraction) and a boolean mask
/// aligned with the grid (for elementwise work). Built once per polygon and
/// reused every timestep, since the grid never changes during a run.
#[derive(Clone, Debug)]
pub struct CellSelection {
    shape: (usize, usize),
    indices: Vec<usize>,
    mask: Vec<bool>,
}

impl CellSelection {
    /// Build a selection from explicit flat indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range for the shape.
    pub fn from_indices(shape: (usize, usize), indices: Vec<usize>) -> Self {
        let n = shape.0 * shape.1;
        let mut mask = vec![false; n];
        for &idx in &indices {
            assert!(idx < n, "Cell index {} out of range for grid", idx);
            mask[idx] = true;
        }
        Self {
            shape,
            indices,
            mask,
        }
    }

    /// Shape of the grid this selection was built against.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Flat indices of the covered cells, in row-major order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Boolean mask aligned with the grid.
    #[inline]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Number of covered cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if no cell is covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Summary statistics for diagnostics.
    pub fn statistics(&self) -> MembershipStatistics {
        MembershipStatistics {
            grid_cells: self.shape.0 * self.shape.1,
            covered_cells: self.len(),
        }
    }
}

/// Statistics about a membership query.
#[derive(Debug, Clone, Copy)]
pub struct MembershipStatistics {
    /// Total number of grid cells
    pub grid_cells: usize,
    /// Number of cells inside the polygon
    pub covered_cells: usize,
}

impl fmt::Display for MembershipStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Membership: {} of {} cells ({:.2}%)",
            self.covered_cells,
            self.grid_cells,
            100.0 * self.covered_cells as f64 / self.grid_cells as f64
        )
    }
}

/// Find the grid cells whose sample point lies inside the polygon.
///
/// Candidates are prefiltered by the polygon's bounding box, then tested
/// exactly. `name` is only used to label errors.
///
/// # Errors
///
/// Returns [`MembershipError::NoCellsInside`] if no sample point falls
/// inside the polygon, and [`MembershipError::EmptyGeometry`] if the
/// polygon has no bounding box.
pub fn cells_within_polygon(
    polygon: &Polygon<f64>,
    grid: &ObservationGrid,
    name: &str,
) -> Result<CellSelection, MembershipError> {
    let bbox = polygon
        .bounding_rect()
        .ok_or_else(|| MembershipError::EmptyGeometry {
            name: name.to_string(),
        })?;

    let (min_x, min_y) = (bbox.min().x, bbox.min().y);
    let (max_x, max_y) = (bbox.max().x, bbox.max().y);

    let mut indices = Vec::new();
    for (idx, x, y) in grid.iter_points() {
        if x < min_x || x > max_x || y < min_y || y > max_y {
            continue;
        }
        if polygon.contains(&Point::new(x, y)) {
            indices.push(idx);
        }
    }

    if indices.is_empty() {
        return Err(MembershipError::NoCellsInside {
            name: name.to_string(),
        });
    }

    Ok(CellSelection::from_indices(grid.shape(), indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]),
            vec![],
        )
    }

    #[test]
    fn test_square_covers_interior_cells() {
        let grid = ObservationGrid::uniform_rectangle(0.0, 10.0, 0.0, 10.0, 11, 11);
        let poly = square(2.5, 2.5, 5.5, 5.5);

        let cells = cells_within_polygon(&poly, &grid, "test").unwrap();
        // Interior samples at x,y in {3,4,5} -> 9 cells
        assert_eq!(cells.len(), 9);
        for &idx in cells.indices() {
            let (x, y) = grid.point(idx);
            assert!(x > 2.5 && x < 5.5 && y > 2.5 && y < 5.5);
        }
    }

    #[test]
    fn test_mask_agrees_with_indices() {
        let grid = ObservationGrid::uniform_rectangle(0.0, 4.0, 0.0, 4.0, 5, 5);
        let poly = square(0.5, 0.5, 2.5, 2.5);
        let cells = cells_within_polygon(&poly, &grid, "test").unwrap();

        let from_mask: Vec<usize> = cells
            .mask()
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect();
        assert_eq!(from_mask, cells.indices());
    }

    #[test]
    fn test_empty_result_is_error() {
        let grid = ObservationGrid::uniform_rectangle(0.0, 10.0, 0.0, 10.0, 11, 11);
        // Polygon between grid samples
        let poly = square(1.2, 1.2, 1.8, 1.8);

        let err = cells_within_polygon(&poly, &grid, "sliver").unwrap_err();
        assert!(matches!(err, MembershipError::NoCellsInside { .. }));
        assert!(err.to_string().contains("sliver"));
    }

    #[test]
    fn test_statistics_display() {
        let cells = CellSelection::from_indices((10, 10), vec![0, 1, 2, 3]);
        let stats = cells.statistics();
        assert_eq!(stats.covered_cells, 4);
        assert!(stats.to_string().contains("4 of 100"));
    }
}
