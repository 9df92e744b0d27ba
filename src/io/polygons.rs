//! Reader for risk polygon shapefiles.
//!
//! Loads the map polygons screened by the classifier, with their land-use
//! codes and unique names, from a shapefile whose attribute table carries
//! `RiskType` (numeric) and optionally `UniqueName` (character) fields.

use std::path::Path;

use geo::{Coord, LineString, Polygon};
use shapefile::dbase::FieldValue;
use shapefile::{Reader, Shape};
use thiserror::Error;

use crate::risk::{RiskError, RiskPolygon, RiskType};

/// Name of the land-use code attribute.
const RISK_TYPE_FIELD: &str = "RiskType";
/// Name of the unique-name attribute.
const UNIQUE_NAME_FIELD: &str = "UniqueName";

/// Error type for polygon file loading.
#[derive(Debug, Error)]
pub enum PolygonFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Shapefile parsing error
    #[error("Shapefile error: {0}")]
    Shapefile(String),

    /// A record without the land-use attribute
    #[error("Record {record} has no RiskType attribute")]
    MissingRiskType { record: usize },

    /// A land-use attribute that is not numeric
    #[error("Record {record} has a non-numeric RiskType attribute")]
    NonNumericRiskType { record: usize },

    /// An unknown land-use code (fails fast, never defaulted)
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// No polygons in the file
    #[error("No polygons found in shapefile")]
    NoPolygons,
}

impl From<shapefile::Error> for PolygonFileError {
    fn from(e: shapefile::Error) -> Self {
        PolygonFileError::Shapefile(e.to_string())
    }
}

fn risk_type_of(record: &shapefile::dbase::Record, index: usize) -> Result<RiskType, PolygonFileError> {
    let value = record
        .get(RISK_TYPE_FIELD)
        .ok_or(PolygonFileError::MissingRiskType { record: index })?;

    let code = match value {
        FieldValue::Numeric(Some(v)) => *v as i64,
        FieldValue::Float(Some(v)) => *v as i64,
        FieldValue::Integer(v) => i64::from(*v),
        _ => return Err(PolygonFileError::NonNumericRiskType { record: index }),
    };

    Ok(RiskType::try_from(code)?)
}

fn unique_name_of(record: &shapefile::dbase::Record) -> Option<String> {
    match record.get(UNIQUE_NAME_FIELD) {
        Some(FieldValue::Character(Some(name))) => {
            let name = name.trim();
            (!name.is_empty()).then(|| name.to_string())
        }
        _ => None,
    }
}

/// Load risk polygons from a shapefile.
///
/// Each shape's outer ring becomes one polygon. The `RiskType` attribute is
/// required on every record and must decode to a known land-use code;
/// `UniqueName` is optional.
///
/// # Errors
///
/// Returns a [`PolygonFileError`] on I/O or format errors, a missing or
/// unknown land-use code, or an empty file.
pub fn read_risk_polygons<P: AsRef<Path>>(path: P) -> Result<Vec<RiskPolygon>, PolygonFileError> {
    let mut reader = Reader::from_path(path)?;
    let mut polygons = Vec::new();

    for (index, result) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = result?;

        let shp_polygon = match shape {
            Shape::Polygon(p) => p,
            _ => continue, // Ignore non-polygon shapes
        };

        let risk_type = risk_type_of(&record, index)?;
        let name = unique_name_of(&record);

        for ring in shp_polygon.rings() {
            let coords: Vec<Coord<f64>> = ring
                .points()
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect();
            let exterior = LineString::from(coords);
            let mut polygon = RiskPolygon::new(risk_type, Polygon::new(exterior, vec![]));
            if let Some(name) = &name {
                polygon = polygon.with_name(name.clone());
            }
            polygons.push(polygon);
        }
    }

    if polygons.is_empty() {
        return Err(PolygonFileError::NoPolygons);
    }

    Ok(polygons)
}
