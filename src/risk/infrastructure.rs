//! Depth-to-infrastructure lookup.
//!
//! Buried infrastructure depths come from as-built plans as invert
//! elevations [ft NGVD29]. The depth below grade for a polygon is the
//! minimum ground-surface elevation over its cells minus the invert
//! elevation. The table is configuration data: new sites are added by
//! editing the data (or a config file, see [`crate::io::site_config`]),
//! not the code.

use crate::risk::RiskError;

/// Invert elevation of the Missouri Avenue pipeline connection at the
/// Ranney well [ft NGVD29], from the pipeline plans.
pub const MISSOURI_AVE_RANNEY_INVERT_FT: f64 = 384.50;

/// Average invert elevation of the Missouri Avenue pipeline running north
/// from the dewatering site [ft NGVD29]: the Ranney invert plus the rise of
/// a 0.5% slope over 150 ft.
pub const MISSOURI_AVE_PIPELINE_NORTH_INVERT_FT: f64 = 384.50 + 0.005 * 150.0;

/// Lookup table from polygon unique name to invert elevation [ft].
#[derive(Clone, Debug, PartialEq)]
pub struct InfrastructureTable {
    entries: Vec<(String, f64)>,
}

impl Default for InfrastructureTable {
    /// The two Missouri Avenue pipeline segments from the as-built plans.
    fn default() -> Self {
        Self {
            entries: vec![
                (
                    "Missouri Avenue Infrastructure - Ranney".to_string(),
                    MISSOURI_AVE_RANNEY_INVERT_FT,
                ),
                (
                    "Missouri Avenue Infrastructure - Pipeline North".to_string(),
                    MISSOURI_AVE_PIPELINE_NORTH_INVERT_FT,
                ),
            ],
        }
    }
}

impl InfrastructureTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a table from (name, invert elevation) pairs.
    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, invert_elevation: f64) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = invert_elevation;
        } else {
            self.entries.push((name, invert_elevation));
        }
    }

    /// Invert elevation for a named site, if present.
    pub fn invert_elevation(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| *e)
    }

    /// All entries.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Depth below grade [ft] for a polygon.
    ///
    /// `ground_min` is the minimum ground-surface elevation over the
    /// polygon's cells. A known `name` looks up the invert elevation; an
    /// unknown name is a configuration error, as is a computed depth below
    /// zero (the infrastructure would sit above grade).
    ///
    /// A polygon with *no name attribute at all* falls back to zero depth.
    // TODO: a missing name should probably be a configuration error too;
    // zero depth makes any wet infrastructure polygon read as damaged.
    pub fn depth_below_grade(&self, ground_min: f64, name: Option<&str>) -> Result<f64, RiskError> {
        let Some(name) = name else {
            return Ok(0.0);
        };
        let invert = self
            .invert_elevation(name)
            .ok_or_else(|| RiskError::UnknownSite(name.to_string()))?;
        let depth = ground_min - invert;
        if depth < 0.0 {
            return Err(RiskError::InvalidDepth(depth));
        }
        Ok(depth)
    }
}
