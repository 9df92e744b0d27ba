//! Structured 2D observation grid.
//!
//! An [`ObservationGrid`] is the fixed set of (x, y) sample coordinates at
//! which drawdown and head are evaluated, in the site's planar system in
//! meters. It is immutable for the duration of a run; ground-surface and
//! water-table rasters are aligned with it cell-for-cell.

/// A structured N×M grid of observation coordinates.
///
/// Coordinates are stored row-major: index `j * nx + i` holds the point in
/// column `i` (x-direction) of row `j` (y-direction).
#[derive(Clone, Debug)]
pub struct ObservationGrid {
    /// Number of samples in the x-direction
    nx: usize,
    /// Number of samples in the y-direction
    ny: usize,
    /// x-coordinate of each sample, row-major
    x: Vec<f64>,
    /// y-coordinate of each sample, row-major
    y: Vec<f64>,
}

impl ObservationGrid {
    /// Create a uniform rectangular grid spanning the given bounds inclusively.
    ///
    /// # Panics
    ///
    /// Panics if either direction has fewer than two samples or the bounds
    /// are inverted.
    pub fn uniform_rectangle(x0: f64, x1: f64, y0: f64, y1: f64, nx: usize, ny: usize) -> Self {
        assert!(
            nx > 1 && ny > 1,
            "Need at least two samples in each direction"
        );
        assert!(x1 > x0 && y1 > y0, "Invalid domain bounds");

        let dx = (x1 - x0) / (nx - 1) as f64;
        let dy = (y1 - y0) / (ny - 1) as f64;

        let mut x = Vec::with_capacity(nx * ny);
        let mut y = Vec::with_capacity(nx * ny);

        for j in 0..ny {
            for i in 0..nx {
                x.push(x0 + i as f64 * dx);
                y.push(y0 + j as f64 * dy);
            }
        }

        Self { nx, ny, x, y }
    }

    /// Create a grid from precomputed coordinate arrays (row-major).
    ///
    /// # Panics
    ///
    /// Panics if the array lengths do not match `nx * ny`.
    pub fn from_coordinates(nx: usize, ny: usize, x: Vec<f64>, y: Vec<f64>) -> Self {
        assert_eq!(x.len(), nx * ny, "x coordinate array has wrong length");
        assert_eq!(y.len(), nx * ny, "y coordinate array has wrong length");
        Self { nx, ny, x, y }
    }

    /// Grid shape as (nx, ny).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total number of sample points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// True if the grid has no sample points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the sample in column `i`, row `j`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        j * self.nx + i
    }

    /// Coordinates of the sample at flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> (f64, f64) {
        (self.x[idx], self.y[idx])
    }

    /// x-coordinates, row-major.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// y-coordinates, row-major.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterate over (flat index, x, y).
    pub fn iter_points(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .enumerate()
            .map(|(idx, (&x, &y))| (idx, x, y))
    }

    /// Bounding extent as (min_x, min_y, max_x, max_y).
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let fold = |vals: &[f64]| {
            vals.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
        };
        let (min_x, max_x) = fold(&self.x);
        let (min_y, max_y) = fold(&self.y);
        (min_x, min_y, max_x, max_y)
    }
}
