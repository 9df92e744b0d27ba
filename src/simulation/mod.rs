//! High-level scenario driver.

pub mod runner;

pub use runner::{RunOutcome, RunnerConfig, RunnerError, ScenarioRunner, StepResult};
