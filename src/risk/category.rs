//! Land-use codes and risk categories.

use std::fmt;

use crate::risk::RiskError;

/// Land-use code attached to each polygon, driving the decision branch.
///
/// The numeric codes come from the site shapefiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskType {
    /// Code 0: road
    Road,
    /// Code 1: residential (assumed basements)
    Residential,
    /// Code 2: buried infrastructure (depth from as-built plans)
    Infrastructure,
    /// Code 3: roadway corridor (lower threshold in the Venice area)
    Roadway,
    /// Code 4: open/other land
    Open,
}

impl RiskType {
    /// The shapefile code for this type.
    pub fn code(self) -> i64 {
        match self {
            RiskType::Road => 0,
            RiskType::Residential => 1,
            RiskType::Infrastructure => 2,
            RiskType::Roadway => 3,
            RiskType::Open => 4,
        }
    }

    /// Whether this type compares the water table directly against the
    /// ground surface (road/roadway/open land).
    pub fn compares_to_ground(self) -> bool {
        matches!(self, RiskType::Road | RiskType::Roadway | RiskType::Open)
    }
}

impl TryFrom<i64> for RiskType {
    type Error = RiskError;

    /// Decode a shapefile land-use code.
    ///
    /// Any code outside {0..=4} is a configuration error carrying the
    /// offending value. Unknown land uses fail fast, they are never
    /// defaulted.
    fn try_from(code: i64) -> Result<Self, RiskError> {
        match code {
            0 => Ok(RiskType::Road),
            1 => Ok(RiskType::Residential),
            2 => Ok(RiskType::Infrastructure),
            3 => Ok(RiskType::Roadway),
            4 => Ok(RiskType::Open),
            other => Err(RiskError::UnknownRiskType(other)),
        }
    }
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskType::Road => "road",
            RiskType::Residential => "residential",
            RiskType::Infrastructure => "infrastructure",
            RiskType::Roadway => "roadway",
            RiskType::Open => "open",
        };
        write!(f, "{}", name)
    }
}

/// Risk category assigned to a flagged polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskCategory {
    /// Water table at or above the ground surface
    SurfaceFlooding,
    /// Water table above the assumed basement floor
    BasementFlooding,
    /// Water table above the buried infrastructure
    InfrastructureDamage,
}

impl RiskCategory {
    /// Legacy color code used by downstream mapping (0/1/2).
    pub fn color_code(self) -> u8 {
        match self {
            RiskCategory::SurfaceFlooding => 0,
            RiskCategory::BasementFlooding => 1,
            RiskCategory::InfrastructureDamage => 2,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskCategory::SurfaceFlooding => "surface flooding",
            RiskCategory::BasementFlooding => "basement flooding",
            RiskCategory::InfrastructureDamage => "infrastructure damage",
        };
        write!(f, "{}", name)
    }
}
