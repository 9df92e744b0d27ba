//! Pumping schedules: signed time offsets and the recovery stagger.
//!
//! Times are hours relative to the pumping start. Positive offsets are the
//! pumping phase; zero and negative offsets are the recovery/injection
//! phase, evaluated with the two-term superposition in
//! [`crate::solver::theis`].

use thiserror::Error;

/// Error type for schedule validation.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The schedule has no entries.
    #[error("Pumping schedule is empty")]
    Empty,

    /// An offset is NaN or infinite.
    #[error("Pumping schedule contains a non-finite offset: {0}")]
    NonFinite(f64),

    /// No positive entry to derive the recovery stagger from.
    #[error("Pumping schedule has no positive offsets; cannot derive the recovery stagger")]
    NoPositiveEntries,
}

/// Evaluation phase for a signed time offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `t > 0`: single-term Theis evaluation
    Pumping,
    /// `t <= 0`: two-term recovery/injection evaluation
    Recovery,
}

impl Phase {
    /// Phase of a signed time offset.
    #[inline]
    pub fn of(t: f64) -> Self {
        if t > 0.0 { Phase::Pumping } else { Phase::Recovery }
    }
}

/// An ordered sequence of signed time offsets [h].
///
/// The recovery stagger Δt₁ (the width of the time step immediately
/// following `t = 0`) is the first strictly positive entry. It offsets the
/// continued-pumping term of the recovery evaluation, reproducing an
/// imaginary injection well that starts at the original pumping start.
#[derive(Clone, Debug, PartialEq)]
pub struct PumpingSchedule {
    offsets: Vec<f64>,
    recovery_stagger: f64,
}

impl PumpingSchedule {
    /// Create a validated schedule from signed offsets.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if the sequence is empty, contains a
    /// non-finite value, or has no strictly positive entry.
    pub fn new(offsets: Vec<f64>) -> Result<Self, ScheduleError> {
        if offsets.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if let Some(&bad) = offsets.iter().find(|t| !t.is_finite()) {
            return Err(ScheduleError::NonFinite(bad));
        }
        let recovery_stagger = offsets
            .iter()
            .copied()
            .find(|&t| t > 0.0)
            .ok_or(ScheduleError::NoPositiveEntries)?;

        Ok(Self {
            offsets,
            recovery_stagger,
        })
    }

    /// The signed offsets in schedule order.
    #[inline]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of timesteps.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if the schedule has no timesteps (never; construction forbids it).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The recovery stagger Δt₁ [h].
    #[inline]
    pub fn recovery_stagger(&self) -> f64 {
        self.recovery_stagger
    }

    /// Iterate over (step index, signed offset).
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.offsets.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_is_first_positive_entry() {
        let schedule = PumpingSchedule::new(vec![0.0, 6.0, 12.0, 24.0, -6.0, -12.0]).unwrap();
        assert_eq!(schedule.recovery_stagger(), 6.0);
        assert_eq!(schedule.len(), 6);
    }

    #[test]
    fn test_stagger_without_leading_zero() {
        let schedule = PumpingSchedule::new(vec![3.0, 6.0, -3.0]).unwrap();
        assert_eq!(schedule.recovery_stagger(), 3.0);
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(
            PumpingSchedule::new(vec![]),
            Err(ScheduleError::Empty)
        ));
    }

    #[test]
    fn test_no_positive_entries_is_error() {
        assert!(matches!(
            PumpingSchedule::new(vec![0.0, -6.0, -12.0]),
            Err(ScheduleError::NoPositiveEntries)
        ));
    }

    #[test]
    fn test_non_finite_is_error() {
        let err = PumpingSchedule::new(vec![6.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, ScheduleError::NonFinite(_)));
    }

    #[test]
    fn test_phase() {
        assert_eq!(Phase::of(6.0), Phase::Pumping);
        assert_eq!(Phase::of(0.0), Phase::Recovery);
        assert_eq!(Phase::of(-6.0), Phase::Recovery);
    }
}
