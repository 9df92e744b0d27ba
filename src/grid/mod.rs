//! Observation grid, raster fields, and polygon-cell membership.

pub mod grid2d;
pub mod membership;
pub mod raster;

pub use grid2d::ObservationGrid;
pub use membership::{
    CellSelection, MembershipError, MembershipStatistics, cells_within_polygon,
};
pub use raster::RasterField2D;
