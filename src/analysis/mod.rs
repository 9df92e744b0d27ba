//! Diagnostics: percentile statistics and the per-well drawdown record.

pub mod drawdown;
pub mod metrics;

pub use drawdown::{DrawdownStatistics, MaxDrawdownRecord};
pub use metrics::{minimum, percentile};
