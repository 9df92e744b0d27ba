//! # theis-rs
//!
//! Analytical well-field drawdown superposition and flood-risk screening.
//!
//! This crate provides the core building blocks for transient dewatering
//! analyses over a structured observation grid:
//! - The Theis well function (stable exponential-integral evaluation)
//! - Single-well transient drawdown fields with recovery/injection handling
//! - Multi-well superposition with per-well activation and QA records
//! - Polygon-grid membership
//! - Percentile-threshold flood-risk classification per map polygon
//! - A scenario runner tying solver and classifier through a pumping
//!   schedule
//! - Readers for well usage tables, risk configuration, polygon
//!   shapefiles, and HSU summaries

pub mod analysis;
pub mod aquifer;
pub mod grid;
pub mod io;
pub mod risk;
pub mod simulation;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use analysis::{DrawdownStatistics, MaxDrawdownRecord, minimum, percentile};
pub use aquifer::{
    AquiferParameters, Area, AreaContext, ParameterError, Well, WellField, WellUsage,
    WellUsageTable,
};
pub use grid::{
    CellSelection, MembershipError, MembershipStatistics, ObservationGrid, RasterField2D,
    cells_within_polygon,
};
pub use risk::{
    BASEMENT_DEPTH_FT, InfrastructureTable, RiskCategory, RiskClassifier, RiskError,
    RiskPolygon, RiskType, ThresholdPolicy,
};
#[cfg(feature = "parallel")]
pub use risk::classify_all_parallel;
pub use simulation::{RunOutcome, RunnerConfig, RunnerError, ScenarioRunner, StepResult};
pub use solver::{
    Phase, PumpingSchedule, ScheduleError, SimulationState, SolverConfig, SuperpositionSolver,
    transient_drawdown, well_drawdown, well_function,
};
#[cfg(feature = "parallel")]
pub use solver::superpose_parallel;
pub use types::{StepIndex, WellIndex};
pub use types::units::{FT_TO_M, GAL_PER_FT3, M_TO_FT, gpm_to_cubic_meters_per_hour};

// I/O types
pub use io::{
    HsuFileError, HsuSummary, HsuZone, PolygonFileError, RiskSiteConfig, SiteConfigError,
    WellTableError, WellTableFile, read_hsu_summary, read_risk_polygons, read_site_config,
    read_well_table,
};
