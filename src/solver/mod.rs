//! Analytical well-superposition solver.
//!
//! Evaluates the Theis transient drawdown of each active well over the
//! observation grid, superimposes the per-well fields, and maintains the
//! water-table surface as the initial head minus the summed drawdown.

pub mod schedule;
pub mod state;
pub mod superposition;
pub mod theis;
pub mod wellfn;

pub use schedule::{Phase, PumpingSchedule, ScheduleError};
pub use state::SimulationState;
pub use superposition::SuperpositionSolver;
#[cfg(feature = "parallel")]
pub use superposition::superpose_parallel;
pub use theis::{SolverConfig, transient_drawdown, well_drawdown};
pub use wellfn::well_function;
