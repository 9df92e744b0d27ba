//! Single-well transient drawdown fields.
//!
//! For a well at (x_w, y_w) pumping at rate Q, the Theis solution gives the
//! drawdown at radial distance r and elapsed time τ:
//! ```text
//! s(r, τ) = Q / (4π T) · W(u),   u = r² S / (4 T τ)
//! ```
//! with W the well function of [`crate::solver::wellfn`].
//!
//! Recovery and injection (`t <= 0`) superpose an imaginary injection well
//! starting at the original pumping start: the drawdown is the difference
//! of two Theis evaluations, one at `Δt₁ + |t|` (continued pumping) minus
//! one at `|t|` (the recovery origin). At `|t| = 0` the second term has
//! u = ∞ and vanishes, so the expression degrades continuously at the
//! phase boundary.

use std::f64::consts::PI;

use crate::aquifer::{AquiferParameters, Well};
use crate::grid::{ObservationGrid, RasterField2D};
use crate::solver::wellfn::well_function;
use crate::types::units::M_TO_FT;

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Factor converting aquifer-unit (metric) drawdown into the head
    /// raster unit. The default converts meters to feet, matching sites
    /// whose DEMs and head surfaces are in feet; use `1.0` for fully
    /// metric sites.
    pub head_scale: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            head_scale: M_TO_FT,
        }
    }
}

impl SolverConfig {
    /// Config that keeps drawdown in aquifer units.
    pub fn metric() -> Self {
        Self { head_scale: 1.0 }
    }
}

/// Drawdown at squared radius `r2` after elapsed time `tau` (hours, > 0).
///
/// Returns 0 for the two degenerate arguments: `tau == 0` (the evaluation
/// predates any pumping; u = ∞) and `r2 == 0` (a grid node exactly at the
/// well bore, where W is unbounded; that cell is skipped rather than
/// poisoning the field).
#[inline]
fn drawdown_at(r2: f64, discharge: f64, aquifer: &AquiferParameters, tau: f64, scale: f64) -> f64 {
    if tau == 0.0 {
        return 0.0;
    }
    let u = r2 * aquifer.storativity / (4.0 * aquifer.transmissivity * tau);
    if u == 0.0 {
        return 0.0;
    }
    discharge / (4.0 * PI * aquifer.transmissivity) * well_function(u) * scale
}

/// Theis drawdown field of one well over the grid at elapsed time `tau` [h].
///
/// `tau` must be non-negative; phase handling belongs to
/// [`transient_drawdown`].
pub fn well_drawdown(
    grid: &ObservationGrid,
    aquifer: &AquiferParameters,
    discharge: f64,
    well: &Well,
    tau: f64,
    config: &SolverConfig,
) -> RasterField2D {
    debug_assert!(tau >= 0.0, "elapsed time must be non-negative");

    let mut field = RasterField2D::zeros(grid.shape());
    for (idx, x, y) in grid.iter_points() {
        let r2 = well.distance_squared(x, y);
        field.set(idx, drawdown_at(r2, discharge, aquifer, tau, config.head_scale));
    }
    field
}

/// Drawdown field of one well at the signed schedule time `t` [h].
///
/// - `t > 0`: pumping phase, a single Theis evaluation at `t`.
/// - `t <= 0`: recovery/injection phase, the two-term difference
///   `s(Δt₁ + |t|) − s(|t|)` with `stagger = Δt₁` from the schedule.
pub fn transient_drawdown(
    grid: &ObservationGrid,
    aquifer: &AquiferParameters,
    discharge: f64,
    well: &Well,
    t: f64,
    stagger: f64,
    config: &SolverConfig,
) -> RasterField2D {
    if t > 0.0 {
        well_drawdown(grid, aquifer, discharge, well, t, config)
    } else {
        let elapsed = t.abs();
        let continued = well_drawdown(grid, aquifer, discharge, well, stagger + elapsed, config);
        let recovered = well_drawdown(grid, aquifer, discharge, well, elapsed, config);
        continued.subtract(&recovered)
    }
}
