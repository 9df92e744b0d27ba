//! Pumping/injection wells and the well field.

use crate::types::WellIndex;

/// A single pumping or injection well.
///
/// Coordinates are in the site's planar system, in meters, matching the
/// observation grid: radial distances feed directly into the metric Theis
/// argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Well {
    /// Name used to key into the usage table
    pub name: String,
    /// x-coordinate [m]
    pub x: f64,
    /// y-coordinate [m]
    pub y: f64,
}

impl Well {
    /// Create a new well.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Squared distance from this well to a point.
    #[inline]
    pub fn distance_squared(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

/// An ordered collection of wells, addressed by [`WellIndex`].
#[derive(Clone, Debug, Default)]
pub struct WellField {
    wells: Vec<Well>,
}

impl WellField {
    /// Create an empty well field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a well field from a list of wells.
    pub fn from_wells(wells: Vec<Well>) -> Self {
        Self { wells }
    }

    /// Add a well, returning its index.
    pub fn push(&mut self, well: Well) -> WellIndex {
        let idx = WellIndex::new(self.wells.len());
        self.wells.push(well);
        idx
    }

    /// Number of wells.
    #[inline]
    pub fn len(&self) -> usize {
        self.wells.len()
    }

    /// True if no wells are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// The well at the given index.
    #[inline]
    pub fn get(&self, idx: WellIndex) -> &Well {
        &self.wells[idx.get()]
    }

    /// All wells as a slice.
    #[inline]
    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    /// Iterate over wells.
    pub fn iter(&self) -> impl Iterator<Item = &Well> {
        self.wells.iter()
    }

    /// Iterate over (index, well) pairs.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (WellIndex, &Well)> {
        self.wells
            .iter()
            .enumerate()
            .map(|(i, w)| (WellIndex::new(i), w))
    }

    /// Find a well by name.
    pub fn find(&self, name: &str) -> Option<(WellIndex, &Well)> {
        self.iter_indexed().find(|(_, w)| w.name == name)
    }
}
