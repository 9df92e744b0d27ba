//! Simulation state: initial head and the evolving water table.

use crate::grid::RasterField2D;

/// Head fields carried across timesteps.
///
/// The initial (pre-pumping) head is fixed for the whole run; the water
/// table is recomputed each timestep as `initial − superposed drawdown`.
/// The risk classifier reads the water table and never writes it.
#[derive(Clone, Debug)]
pub struct SimulationState {
    initial_head: RasterField2D,
    water_table: RasterField2D,
}

impl SimulationState {
    /// Create a state whose water table starts at the initial head.
    pub fn new(initial_head: RasterField2D) -> Self {
        let water_table = initial_head.clone();
        Self {
            initial_head,
            water_table,
        }
    }

    /// The fixed pre-pumping head field.
    #[inline]
    pub fn initial_head(&self) -> &RasterField2D {
        &self.initial_head
    }

    /// The current water-table field.
    #[inline]
    pub fn water_table(&self) -> &RasterField2D {
        &self.water_table
    }

    /// Recompute the water table from a superposed drawdown field.
    ///
    /// # Panics
    ///
    /// Panics if the drawdown field's shape differs from the initial head.
    pub fn apply_drawdown(&mut self, superposed: &RasterField2D) {
        self.water_table = self.initial_head.subtract(superposed);
    }
}
