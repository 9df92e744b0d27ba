//! The per-polygon risk decision.
//!
//! One call decides one polygon at one timestep. The decision compares the
//! water-table percentile against a representative ground elevation and
//! then, depending on land use, against the assumed basement floor or the
//! buried infrastructure depth. The caller applies the returned assignment; the
//! input polygon is never mutated.

use crate::analysis::metrics::{minimum, percentile};
use crate::aquifer::Area;
use crate::grid::{CellSelection, RasterField2D};
use crate::risk::{
    InfrastructureTable, RiskCategory, RiskError, RiskPolygon, RiskType, ThresholdPolicy,
};

/// Assumed basement depth below grade for residential polygons [ft].
pub const BASEMENT_DEPTH_FT: f64 = 5.0;

/// Risk classifier for one study area.
#[derive(Clone, Debug)]
pub struct RiskClassifier {
    /// Which study area's threshold overrides apply
    pub area: Area,
    /// Percentile thresholds and designated-site list
    pub thresholds: ThresholdPolicy,
    /// Invert elevations for infrastructure polygons
    pub infrastructure: InfrastructureTable,
}

impl RiskClassifier {
    /// Classifier with default thresholds and the as-built depth table.
    pub fn new(area: Area) -> Self {
        Self {
            area,
            thresholds: ThresholdPolicy::default(),
            infrastructure: InfrastructureTable::default(),
        }
    }

    /// Replace the threshold policy.
    pub fn with_thresholds(mut self, thresholds: ThresholdPolicy) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the infrastructure table.
    pub fn with_infrastructure(mut self, table: InfrastructureTable) -> Self {
        self.infrastructure = table;
        self
    }

    /// Decide the risk category for one polygon at the current timestep.
    ///
    /// Returns `Ok(None)` when the polygon is not at risk. The cell
    /// selection must be non-empty; membership is precomputed by
    /// [`crate::grid::cells_within_polygon`], which already rejects empty
    /// results, but the check is repeated here so no percentile ever runs
    /// over an empty selection.
    ///
    /// # Errors
    ///
    /// [`RiskError::EmptySelection`] for an empty cell set;
    /// [`RiskError::UnknownSite`] / [`RiskError::InvalidDepth`] from the
    /// infrastructure lookup.
    pub fn classify(
        &self,
        polygon: &RiskPolygon,
        cells: &CellSelection,
        water_table: &RasterField2D,
        ground_surface: &RasterField2D,
    ) -> Result<Option<RiskCategory>, RiskError> {
        if cells.is_empty() {
            return Err(RiskError::EmptySelection {
                name: polygon.label().to_string(),
            });
        }

        let threshold = self.thresholds.percentile_for(self.area, polygon);

        let ground = ground_surface.values_at(cells);
        let water = water_table.values_at(cells);

        let grd_elev = percentile(&ground, threshold);
        let wt_elev = percentile(&water, threshold);

        let category = match polygon.risk_type {
            RiskType::Road | RiskType::Roadway | RiskType::Open => {
                (wt_elev >= grd_elev).then_some(RiskCategory::SurfaceFlooding)
            }

            RiskType::Residential => {
                let basement_floor = grd_elev - BASEMENT_DEPTH_FT;
                if wt_elev >= grd_elev {
                    Some(RiskCategory::SurfaceFlooding)
                } else if wt_elev >= basement_floor {
                    Some(RiskCategory::BasementFlooding)
                } else {
                    None
                }
            }

            RiskType::Infrastructure => {
                let depth = self
                    .infrastructure
                    .depth_below_grade(minimum(&ground), polygon.name.as_deref())?;
                let infra_elev = grd_elev - depth;
                if wt_elev >= grd_elev {
                    Some(RiskCategory::SurfaceFlooding)
                } else if wt_elev >= infra_elev {
                    Some(RiskCategory::InfrastructureDamage)
                } else {
                    None
                }
            }
        };

        Ok(category)
    }

    /// Classify and return an updated copy of the polygon.
    pub fn assign(
        &self,
        polygon: &RiskPolygon,
        cells: &CellSelection,
        water_table: &RasterField2D,
        ground_surface: &RasterField2D,
    ) -> Result<RiskPolygon, RiskError> {
        let category = self.classify(polygon, cells, water_table, ground_surface)?;
        Ok(polygon.with_assignment(category))
    }
}

/// Classify every polygon of one timestep in parallel.
///
/// Each polygon's decision is independent; no two tasks touch the same
/// polygon. Results come back in input order.
#[cfg(feature = "parallel")]
pub fn classify_all_parallel(
    classifier: &RiskClassifier,
    polygons: &[RiskPolygon],
    selections: &[CellSelection],
    water_table: &RasterField2D,
    ground_surface: &RasterField2D,
) -> Result<Vec<Option<RiskCategory>>, RiskError> {
    use rayon::prelude::*;

    assert_eq!(
        polygons.len(),
        selections.len(),
        "One cell selection per polygon"
    );

    polygons
        .par_iter()
        .zip(selections.par_iter())
        .map(|(polygon, cells)| classifier.classify(polygon, cells, water_table, ground_surface))
        .collect()
}
