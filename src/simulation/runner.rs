//! Scenario runner.
//!
//! Ties the superposition solver and the risk classifier into the
//! per-timestep loop: for each schedule time, superpose the active wells,
//! update the water table against the stored initial head, then classify
//! every polygon against the new surface. Polygon membership is resolved
//! once up front, since the grid never changes during a run.

use thiserror::Error;

use crate::analysis::MaxDrawdownRecord;
use crate::aquifer::{AquiferParameters, AreaContext, WellField};
use crate::grid::{
    CellSelection, MembershipError, ObservationGrid, RasterField2D, cells_within_polygon,
};
use crate::risk::{RiskCategory, RiskClassifier, RiskError, RiskPolygon};
use crate::solver::{PumpingSchedule, SimulationState, SuperpositionSolver};
use crate::types::StepIndex;

/// Error type for scenario runs.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A polygon covers no grid cells.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// A classification failed.
    #[error(transparent)]
    Risk(#[from] RiskError),
}

/// Configuration for a scenario run.
#[derive(Clone, Debug, Default)]
pub struct RunnerConfig {
    /// Print per-step progress to stdout.
    pub verbose: bool,
}

/// Risk assignments for one timestep.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Signed schedule time [h]
    pub time: f64,
    /// One assignment per polygon, in input order
    pub assignments: Vec<Option<RiskCategory>>,
}

impl StepResult {
    /// Number of polygons flagged at this step.
    pub fn flagged_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }
}

/// Everything a scenario run produces.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Per-well, per-step isolated maximum drawdown
    pub record: MaxDrawdownRecord,
    /// Per-step risk assignments
    pub steps: Vec<StepResult>,
}

/// Drives the solver and classifier through a pumping schedule.
pub struct ScenarioRunner {
    grid: ObservationGrid,
    aquifer: AquiferParameters,
    wells: WellField,
    context: AreaContext,
    schedule: PumpingSchedule,
    solver: SuperpositionSolver,
    classifier: RiskClassifier,
    config: RunnerConfig,
}

impl ScenarioRunner {
    /// Create a runner for one scenario.
    ///
    /// The classifier's area should match the context's area; the runner
    /// does not second-guess the caller.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        grid: ObservationGrid,
        aquifer: AquiferParameters,
        wells: WellField,
        context: AreaContext,
        schedule: PumpingSchedule,
        solver: SuperpositionSolver,
        classifier: RiskClassifier,
    ) -> Self {
        Self {
            grid,
            aquifer,
            wells,
            context,
            schedule,
            solver,
            classifier,
            config: RunnerConfig::default(),
        }
    }

    /// Enable verbose progress output.
    pub fn verbose(mut self) -> Self {
        self.config.verbose = true;
        self
    }

    /// The observation grid.
    pub fn grid(&self) -> &ObservationGrid {
        &self.grid
    }

    /// The pumping schedule.
    pub fn schedule(&self) -> &PumpingSchedule {
        &self.schedule
    }

    /// Resolve polygon membership once for the whole run.
    fn resolve_memberships(
        &self,
        polygons: &[RiskPolygon],
    ) -> Result<Vec<CellSelection>, MembershipError> {
        polygons
            .iter()
            .map(|p| cells_within_polygon(&p.geometry, &self.grid, p.label()))
            .collect()
    }

    /// Run the scenario over the full schedule.
    ///
    /// `initial_head` and `ground_surface` must share the grid's shape.
    pub fn run(
        &self,
        initial_head: RasterField2D,
        ground_surface: &RasterField2D,
        polygons: &[RiskPolygon],
    ) -> Result<RunOutcome, RunnerError> {
        self.run_with_callback(initial_head, ground_surface, polygons, |_, _, _| {})
    }

    /// Run the scenario, invoking `callback` after every timestep with the
    /// state, the signed time, and the step's assignments.
    pub fn run_with_callback<F>(
        &self,
        initial_head: RasterField2D,
        ground_surface: &RasterField2D,
        polygons: &[RiskPolygon],
        mut callback: F,
    ) -> Result<RunOutcome, RunnerError>
    where
        F: FnMut(&SimulationState, f64, &StepResult),
    {
        assert_eq!(
            initial_head.shape(),
            self.grid.shape(),
            "Initial head shape must match the grid"
        );
        assert_eq!(
            ground_surface.shape(),
            self.grid.shape(),
            "Ground surface shape must match the grid"
        );

        let selections = self.resolve_memberships(polygons)?;

        let mut state = SimulationState::new(initial_head);
        let mut record = MaxDrawdownRecord::new(self.wells.len(), self.schedule.len());
        let mut steps = Vec::with_capacity(self.schedule.len());

        for (si, t) in self.schedule.iter() {
            let step = StepIndex::new(si);
            let superposed = self.solver.superpose(
                &self.grid,
                &self.aquifer,
                &self.wells,
                &self.context,
                t,
                &self.schedule,
                &mut record,
                step,
            );
            state.apply_drawdown(&superposed);

            let mut assignments = Vec::with_capacity(polygons.len());
            for (polygon, cells) in polygons.iter().zip(selections.iter()) {
                let category = self.classifier.classify(
                    polygon,
                    cells,
                    state.water_table(),
                    ground_surface,
                )?;
                assignments.push(category);
            }

            let result = StepResult {
                time: t,
                assignments,
            };

            if self.config.verbose {
                println!(
                    "  Step {}: t = {:+.2} h, {} of {} polygons flagged",
                    si,
                    t,
                    result.flagged_count(),
                    polygons.len()
                );
            }

            callback(&state, t, &result);
            steps.push(result);
        }

        if self.config.verbose {
            println!("{}", record.statistics());
        }

        Ok(RunOutcome { record, steps })
    }
}
