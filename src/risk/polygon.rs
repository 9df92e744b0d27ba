//! Risk polygons.

use geo::Polygon;

use crate::risk::{RiskCategory, RiskType};

/// A map polygon screened by the classifier.
///
/// The unique name is required only for infrastructure polygons (it keys
/// the depth table) and for designated-site threshold overrides. The
/// assigned category is the classifier's output attribute; everything else
/// is input data.
#[derive(Clone, Debug)]
pub struct RiskPolygon {
    /// Unique name, if the source data carries one
    pub name: Option<String>,
    /// Land-use code
    pub risk_type: RiskType,
    /// Boundary in the site's planar system [m]
    pub geometry: Polygon<f64>,
    /// Risk category assigned at the current timestep, if any
    pub assigned: Option<RiskCategory>,
}

impl RiskPolygon {
    /// Create an unnamed polygon with no assignment.
    pub fn new(risk_type: RiskType, geometry: Polygon<f64>) -> Self {
        Self {
            name: None,
            risk_type,
            geometry,
            assigned: None,
        }
    }

    /// Attach a unique name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name used in diagnostics: the unique name or "unnamed".
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Whether the polygon is currently flagged at risk.
    pub fn is_flagged(&self) -> bool {
        self.assigned.is_some()
    }

    /// Copy of this polygon with a fresh assignment.
    pub fn with_assignment(&self, category: Option<RiskCategory>) -> Self {
        let mut updated = self.clone();
        updated.assigned = category;
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn unit_square() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
            vec![],
        )
    }

    #[test]
    fn test_label() {
        let p = RiskPolygon::new(RiskType::Open, unit_square());
        assert_eq!(p.label(), "unnamed");
        assert_eq!(p.with_name("Park West").label(), "Park West");
    }

    #[test]
    fn test_with_assignment_does_not_mutate() {
        let p = RiskPolygon::new(RiskType::Open, unit_square());
        let flagged = p.with_assignment(Some(RiskCategory::SurfaceFlooding));
        assert!(!p.is_flagged());
        assert!(flagged.is_flagged());
    }
}
