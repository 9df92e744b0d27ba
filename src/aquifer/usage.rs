//! Per-well usage records: activity flags and reported discharge rates.
//!
//! Site operators report which wells are in service over the analysis
//! period, and at what rate. The table is pure input data to the solver: a
//! well with no entry, a cleared in-service flag, or a service window that
//! does not cover the analysis date contributes nothing to the superposed
//! field.

use chrono::NaiveDate;

/// Usage record for one well.
#[derive(Clone, Debug, PartialEq)]
pub struct WellUsage {
    /// Well name matching [`crate::aquifer::Well::name`]
    pub name: String,
    /// Reported discharge rate [gpm]
    pub discharge_gpm: f64,
    /// Whether the well is flagged in service for the scenario
    pub in_service: bool,
    /// Optional service window (inclusive start, exclusive end)
    pub service_window: Option<(NaiveDate, NaiveDate)>,
}

impl WellUsage {
    /// Create an always-in-service record.
    pub fn new(name: impl Into<String>, discharge_gpm: f64, in_service: bool) -> Self {
        Self {
            name: name.into(),
            discharge_gpm,
            in_service,
            service_window: None,
        }
    }

    /// Restrict this record to a service window.
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.service_window = Some((start, end));
        self
    }

    /// Whether the well is active on the given date (or at all, if no date
    /// is supplied).
    pub fn is_active(&self, on: Option<NaiveDate>) -> bool {
        if !self.in_service {
            return false;
        }
        match (self.service_window, on) {
            (Some((start, end)), Some(date)) => start <= date && date < end,
            _ => true,
        }
    }
}

/// Lookup table of usage records, keyed by well name.
#[derive(Clone, Debug, Default)]
pub struct WellUsageTable {
    entries: Vec<WellUsage>,
}

impl WellUsageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a list of records.
    pub fn from_entries(entries: Vec<WellUsage>) -> Self {
        Self { entries }
    }

    /// Add a record.
    pub fn push(&mut self, usage: WellUsage) {
        self.entries.push(usage);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by well name.
    pub fn get(&self, name: &str) -> Option<&WellUsage> {
        self.entries.iter().find(|u| u.name == name)
    }

    /// Discharge [gpm] for the named well if it is active, `None` otherwise.
    ///
    /// A well with no record at all is treated as inactive.
    pub fn active_discharge(&self, name: &str, on: Option<NaiveDate>) -> Option<f64> {
        self.get(name)
            .filter(|u| u.is_active(on))
            .map(|u| u.discharge_gpm)
    }

    /// All records.
    pub fn entries(&self) -> &[WellUsage] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_active_discharge() {
        let table = WellUsageTable::from_entries(vec![
            WellUsage::new("RW-1", 1500.0, true),
            WellUsage::new("RW-2", 800.0, false),
        ]);

        assert_eq!(table.active_discharge("RW-1", None), Some(1500.0));
        assert_eq!(table.active_discharge("RW-2", None), None);
        // Unknown well is inactive, not an error
        assert_eq!(table.active_discharge("RW-9", None), None);
    }

    #[test]
    fn test_service_window() {
        let usage = WellUsage::new("RW-1", 1500.0, true)
            .with_window(date(2019, 6, 1), date(2020, 1, 1));

        assert!(usage.is_active(Some(date(2019, 10, 1))));
        assert!(!usage.is_active(Some(date(2020, 3, 1))));
        // Window is ignored when no analysis date is supplied
        assert!(usage.is_active(None));
    }

    #[test]
    fn test_window_end_is_exclusive() {
        let usage = WellUsage::new("RW-1", 1500.0, true)
            .with_window(date(2019, 6, 1), date(2020, 1, 1));
        assert!(!usage.is_active(Some(date(2020, 1, 1))));
        assert!(usage.is_active(Some(date(2019, 6, 1))));
    }
}
