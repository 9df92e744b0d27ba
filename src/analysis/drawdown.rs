//! Per-well maximum drawdown record.
//!
//! QA bookkeeping for the superposition solver: the grid-maximum drawdown
//! of each well's isolated field, per timestep, before any superposition.
//! Single-well maxima have known target magnitudes from the pumping-test
//! design (on the order of 10 ft for the dewatering wells), so this record
//! is the first thing checked when a run looks wrong.
//!
//! Wells skipped as inactive at a step are recorded as NaN, distinct from
//! a genuine zero drawdown.

use std::fmt;

use crate::types::{StepIndex, WellIndex};

/// Matrix of per-well, per-timestep maximum drawdown [head raster units].
#[derive(Clone, Debug)]
pub struct MaxDrawdownRecord {
    n_wells: usize,
    n_steps: usize,
    /// Row-major: wells × steps
    data: Vec<f64>,
}

impl MaxDrawdownRecord {
    /// Create a record initialized to NaN (nothing evaluated yet).
    pub fn new(n_wells: usize, n_steps: usize) -> Self {
        Self {
            n_wells,
            n_steps,
            data: vec![f64::NAN; n_wells * n_steps],
        }
    }

    /// Number of wells.
    #[inline]
    pub fn n_wells(&self) -> usize {
        self.n_wells
    }

    /// Number of timesteps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    #[inline]
    fn offset(&self, well: WellIndex, step: StepIndex) -> usize {
        debug_assert!(well.get() < self.n_wells && step.get() < self.n_steps);
        well.get() * self.n_steps + step.get()
    }

    /// Record the maximum drawdown for one (well, step) pair.
    #[inline]
    pub fn set(&mut self, well: WellIndex, step: StepIndex, value: f64) {
        let idx = self.offset(well, step);
        self.data[idx] = value;
    }

    /// Recorded value for one (well, step) pair (NaN if skipped/unset).
    #[inline]
    pub fn get(&self, well: WellIndex, step: StepIndex) -> f64 {
        self.data[self.offset(well, step)]
    }

    /// The full time series for one well.
    pub fn well_series(&self, well: WellIndex) -> &[f64] {
        let start = well.get() * self.n_steps;
        &self.data[start..start + self.n_steps]
    }

    /// Wells whose recorded maximum exceeds `limit` at any step.
    pub fn wells_exceeding(&self, limit: f64) -> Vec<(WellIndex, StepIndex, f64)> {
        let mut hits = Vec::new();
        for w in 0..self.n_wells {
            for s in 0..self.n_steps {
                let v = self.data[w * self.n_steps + s];
                if v.is_finite() && v > limit {
                    hits.push((WellIndex::new(w), StepIndex::new(s), v));
                }
            }
        }
        hits
    }

    /// Summary statistics over the whole record.
    pub fn statistics(&self) -> DrawdownStatistics {
        let mut recorded = 0;
        let mut skipped = 0;
        let mut overall_max = f64::NEG_INFINITY;
        let mut max_well = WellIndex::ZERO;
        let mut max_step = StepIndex::ZERO;

        for w in 0..self.n_wells {
            for s in 0..self.n_steps {
                let v = self.data[w * self.n_steps + s];
                if v.is_nan() {
                    skipped += 1;
                } else {
                    recorded += 1;
                    if v > overall_max {
                        overall_max = v;
                        max_well = WellIndex::new(w);
                        max_step = StepIndex::new(s);
                    }
                }
            }
        }

        DrawdownStatistics {
            n_wells: self.n_wells,
            n_steps: self.n_steps,
            recorded,
            skipped,
            overall_max: if recorded > 0 { Some(overall_max) } else { None },
            max_well,
            max_step,
        }
    }
}

/// Statistics about a drawdown record.
#[derive(Debug, Clone, Copy)]
pub struct DrawdownStatistics {
    /// Number of wells
    pub n_wells: usize,
    /// Number of timesteps
    pub n_steps: usize,
    /// Number of (well, step) entries with a recorded value
    pub recorded: usize,
    /// Number of entries skipped as inactive (NaN)
    pub skipped: usize,
    /// Largest recorded single-well maximum, if anything was recorded
    pub overall_max: Option<f64>,
    /// Well holding the overall maximum
    pub max_well: WellIndex,
    /// Step holding the overall maximum
    pub max_step: StepIndex,
}

impl fmt::Display for DrawdownStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Drawdown Record:")?;
        writeln!(f, "  Wells: {}, steps: {}", self.n_wells, self.n_steps)?;
        writeln!(
            f,
            "  Recorded: {}, skipped (inactive): {}",
            self.recorded, self.skipped
        )?;
        match self.overall_max {
            Some(max) => write!(
                f,
                "  Overall max: {:.3} at well {}, step {}",
                max, self.max_well, self.max_step
            ),
            None => write!(f, "  Overall max: none recorded"),
        }
    }
}
