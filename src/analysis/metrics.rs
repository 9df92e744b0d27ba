//! Percentile statistics over cell selections.
//!
//! The risk thresholds were calibrated against numpy's default percentile
//! (linear interpolation between closest ranks), so this implementation
//! reproduces it exactly: `rank = p/100 · (n−1)`, interpolating between the
//! bracketing order statistics.

/// Percentile of a sample with linear interpolation between closest ranks.
///
/// # Panics
///
/// Panics if `values` is empty or `p` lies outside `[0, 100]`.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    assert!(!values.is_empty(), "Percentile of an empty sample");
    assert!(
        (0.0..=100.0).contains(&p),
        "Percentile must be in [0, 100], got {}",
        p
    );

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }
}

/// Minimum of a sample.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn minimum(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "Minimum of an empty sample");
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
