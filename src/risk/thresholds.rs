//! Percentile threshold policy.
//!
//! Representative elevations per polygon are taken at a conservative (low)
//! percentile rather than an average. The base percentile applies
//! everywhere, with two area-specific overrides calibrated during the
//! original studies. All three numbers and the designated-site list are
//! configuration data, editable without code changes (see
//! [`crate::io::site_config`]).

use crate::aquifer::Area;
use crate::risk::{RiskPolygon, RiskType};

/// Threshold configuration for the classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdPolicy {
    /// Base percentile applied to every polygon [0–100]
    pub base_percentile: f64,
    /// Override for roadway polygons in the Venice area
    pub venice_roadway_percentile: f64,
    /// Override for named designated sites in the East St. Louis area
    pub designated_site_percentile: f64,
    /// Unique names of the East St. Louis designated sites
    pub designated_sites: Vec<String>,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            base_percentile: 25.0,
            venice_roadway_percentile: 5.0,
            designated_site_percentile: 2.5,
            designated_sites: Vec::new(),
        }
    }
}

impl ThresholdPolicy {
    /// Policy with a designated-site list.
    pub fn with_designated_sites(sites: Vec<String>) -> Self {
        Self {
            designated_sites: sites,
            ..Self::default()
        }
    }

    /// The percentile to use for one polygon in one area.
    pub fn percentile_for(&self, area: Area, polygon: &RiskPolygon) -> f64 {
        match area {
            Area::Venice => {
                if polygon.risk_type == RiskType::Roadway {
                    self.venice_roadway_percentile
                } else {
                    self.base_percentile
                }
            }
            Area::EastStLouis => {
                let designated = polygon
                    .name
                    .as_deref()
                    .is_some_and(|name| self.designated_sites.iter().any(|s| s == name));
                if designated {
                    self.designated_site_percentile
                } else {
                    self.base_percentile
                }
            }
        }
    }
}
