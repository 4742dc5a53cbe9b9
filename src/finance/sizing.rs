//! Peak-demand reduction sizing.

use super::types::{InputParameters, LimitingFactor, PeakReduction};

/// Round-trip battery efficiency applied to nameplate energy.
///
/// Fixed engine constant, not an input: a 210 kWh battery delivers
/// 189 kWh into the peak.
pub const ROUND_TRIP_EFFICIENCY: f64 = 0.90;

/// Sizes the achievable peak reduction, limited independently by power and
/// by stored energy.
///
/// - `power_limited = min(battery_power_kw, peak_load_kw)`
/// - `energy_limited = min(capacity * ROUND_TRIP_EFFICIENCY / duration, peak_load_kw)`
/// - `actual = min(power_limited, energy_limited)`
///
/// # Panics
///
/// Debug builds panic unless `peak_duration_hours` is strictly positive.
/// Release builds do not check it and return a meaningless reduction: zero
/// duration makes the energy limit `peak_load_kw` (the `inf` or `NaN` energy
/// quotient loses to the peak in `f64::min`), and negative duration makes it
/// negative. Validate inputs first.
pub fn peak_reduction(params: &InputParameters) -> PeakReduction {
    debug_assert!(
        params.peak_duration_hours > 0.0,
        "peak_duration_hours must be > 0, got {}",
        params.peak_duration_hours
    );

    let power_limited_kw = params.battery_power_kw.min(params.peak_load_kw);
    let energy_limited_kw = (params.battery_capacity_kwh * ROUND_TRIP_EFFICIENCY
        / params.peak_duration_hours)
        .min(params.peak_load_kw);

    let (actual_kw, limited_by) = if energy_limited_kw < power_limited_kw {
        (energy_limited_kw, LimitingFactor::Energy)
    } else {
        (power_limited_kw, LimitingFactor::Power)
    };

    PeakReduction {
        power_limited_kw,
        energy_limited_kw,
        actual_kw,
        new_peak_kw: params.peak_load_kw - actual_kw,
        limited_by,
    }
}
