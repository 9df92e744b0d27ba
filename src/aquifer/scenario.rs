//! Scenario context for the two study areas.
//!
//! The Venice and East St. Louis analyses share the same solver but differ
//! in how wells are activated: the Venice dewatering scenario pumps every
//! well at the scenario discharge, while the East St. Louis regional
//! scenario pulls per-well rates from an operator usage table and skips
//! wells that were out of service. Each [`AreaContext`] variant carries its
//! own activation strategy so the solver never inspects what kind of
//! auxiliary data it was handed.

use chrono::NaiveDate;

use crate::aquifer::{AquiferParameters, Well, WellUsageTable};
use crate::types::units::gpm_to_cubic_meters_per_hour;

/// Which study area a scenario belongs to.
///
/// The plain discriminant of [`AreaContext`], used where only the area
/// matters (threshold overrides in the risk classifier).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    /// Venice dewatering site
    Venice,
    /// East St. Louis regional site
    EastStLouis,
}

/// Scenario context carrying the well-activation strategy for its area.
#[derive(Clone, Debug)]
pub enum AreaContext {
    /// Every well pumps at the scenario discharge from the aquifer
    /// parameters.
    Venice,

    /// Wells are activated from an operator usage table; discharge is
    /// per-well, reported in gpm and converted to m³/h.
    EastStLouis {
        /// Usage table keyed by well name
        usage: WellUsageTable,
        /// Date the activity flags are evaluated against, if the table
        /// carries service windows
        analysis_date: Option<NaiveDate>,
    },
}

impl AreaContext {
    /// The plain area discriminant.
    pub fn area(&self) -> Area {
        match self {
            AreaContext::Venice => Area::Venice,
            AreaContext::EastStLouis { .. } => Area::EastStLouis,
        }
    }

    /// Discharge [m³/h] for `well` under this scenario, or `None` if the
    /// well does not participate.
    ///
    /// Inactive wells are skipped by the solver entirely; they are not
    /// zeroed and summed.
    pub fn activation(&self, well: &Well, aquifer: &AquiferParameters) -> Option<f64> {
        match self {
            AreaContext::Venice => Some(aquifer.discharge),
            AreaContext::EastStLouis {
                usage,
                analysis_date,
            } => usage
                .active_discharge(&well.name, *analysis_date)
                .map(gpm_to_cubic_meters_per_hour),
        }
    }
}
