//! File readers for scenario inputs.
//!
//! All inputs are simple line-oriented text files (metadata in `# key:
//! value` comments, whitespace-separated data columns) except the risk
//! polygons, which come from a shapefile. Each reader has its own error
//! type with line numbers where applicable.

pub mod hsu_summary;
pub mod polygons;
pub mod site_config;
pub mod well_table;

pub use hsu_summary::{HsuFileError, HsuSummary, HsuZone, read_hsu_summary};
pub use polygons::{PolygonFileError, read_risk_polygons};
pub use site_config::{RiskSiteConfig, SiteConfigError, read_site_config};
pub use well_table::{WellTableError, WellTableFile, read_well_table};
