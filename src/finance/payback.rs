//! Payback detection on the cumulative NPV curve.

/// First year whose cumulative NPV is non-negative.
///
/// The boundary is inclusive: reaching exactly zero counts as paid back.
/// Returns `f64::INFINITY` when the curve stays negative over the whole
/// horizon, which is an expected outcome rather than an error.
pub fn payback_period(npv_values: &[f64]) -> f64 {
    npv_values
        .iter()
        .position(|&npv| npv >= 0.0)
        .map_or(f64::INFINITY, |year| year as f64)
}
