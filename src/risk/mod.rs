//! Flood-risk classification of map polygons.
//!
//! Given the current water-table surface and the ground-surface raster, each
//! polygon is screened for surface flooding, basement flooding, or
//! infrastructure damage according to its land-use type. Classification is
//! timestep-local: every call produces a fresh assignment and never
//! accumulates state.

pub mod category;
pub mod classifier;
pub mod infrastructure;
pub mod polygon;
pub mod thresholds;

use thiserror::Error;

pub use category::{RiskCategory, RiskType};
pub use classifier::{BASEMENT_DEPTH_FT, RiskClassifier};
#[cfg(feature = "parallel")]
pub use classifier::classify_all_parallel;
pub use infrastructure::InfrastructureTable;
pub use polygon::RiskPolygon;
pub use thresholds::ThresholdPolicy;

/// Error type for risk classification.
///
/// Configuration errors are fatal and carry the offending value; they are
/// never silently defaulted (with the one documented zero-depth fail-safe
/// exception in [`InfrastructureTable::depth_below_grade`]).
#[derive(Debug, Error)]
pub enum RiskError {
    /// A land-use code outside the supported set.
    #[error("RiskType {0} is not incorporated into the analysis")]
    UnknownRiskType(i64),

    /// An infrastructure polygon name with no entry in the depth table.
    #[error("Infrastructure polygon {0:?} does not exist in the depth table")]
    UnknownSite(String),

    /// A computed depth-to-infrastructure below zero.
    #[error("The depth to infrastructure ({0:.2} ft) is invalid")]
    InvalidDepth(f64),

    /// A polygon whose cell selection is empty.
    #[error("Polygon {name:?} covers no grid cells; cannot classify")]
    EmptySelection {
        /// Polygon name, or "unnamed"
        name: String,
    },
}
