//! Internal rate of return via bracketed Newton iteration.
//!
//! A polynomial-roots solve over `(1 + r)` loses precision for long horizons
//! and can miss the real root entirely. Here NPV is evaluated directly and
//! the root is searched inside a fixed rate bracket: Newton steps are taken
//! while they stay inside the shrinking bracket, bisection otherwise.

use tracing::debug;

use super::npv::{net_present_value, net_present_value_slope};
use super::types::IRR_SENTINEL;

/// Lower edge of the searched rate range (-99%).
pub const MIN_RATE: f64 = -0.99;
/// Upper edge of the searched rate range (1000%).
pub const MAX_RATE: f64 = 10.0;

const INITIAL_GUESS: f64 = 0.10;
const MAX_ITERATIONS: usize = 200;
const RATE_TOLERANCE: f64 = 1e-12;

/// Finds the rate in `[MIN_RATE, MAX_RATE]` at which the series NPV is zero.
///
/// Returns `None` when NPV has the same sign at both bracket edges, when NPV
/// is not a number anywhere on the path, or when the iteration budget runs
/// out. For a series with one sign change the root is unique.
pub fn irr(cash_flows: &[f64]) -> Option<f64> {
    let (mut lo, mut hi) = (MIN_RATE, MAX_RATE);
    let npv_lo = net_present_value(lo, cash_flows);
    let npv_hi = net_present_value(hi, cash_flows);
    if npv_lo.is_nan() || npv_hi.is_nan() {
        return None;
    }
    if npv_lo == 0.0 {
        return Some(lo);
    }
    if npv_hi == 0.0 {
        return Some(hi);
    }
    if (npv_lo > 0.0) == (npv_hi > 0.0) {
        return None;
    }
    let positive_below_root = npv_lo > 0.0;

    let mut rate = INITIAL_GUESS;
    for _ in 0..MAX_ITERATIONS {
        let npv = net_present_value(rate, cash_flows);
        if npv.is_nan() {
            return None;
        }
        if npv == 0.0 {
            return Some(rate);
        }
        if (npv > 0.0) == positive_below_root {
            lo = rate;
        } else {
            hi = rate;
        }

        let slope = net_present_value_slope(rate, cash_flows);
        let newton = rate - npv / slope;
        let next = if newton.is_finite() && newton > lo && newton < hi {
            newton
        } else {
            0.5 * (lo + hi)
        };

        if (next - rate).abs() <= RATE_TOLERANCE * (1.0 + rate.abs()) {
            return Some(next);
        }
        rate = next;
    }
    None
}

/// IRR of the peak-shaving cash flows, or [`IRR_SENTINEL`] when undefined.
///
/// `cash_flows` is the series from [`cash_flows`](super::cashflow::cash_flows):
/// the investment at year 0 followed by constant savings. A free system or a
/// system without savings has no meaningful IRR, and neither does a series
/// whose root lies outside the searched bracket. All of these report the
/// sentinel instead of failing.
pub fn project_irr(cash_flows: &[f64]) -> f64 {
    let total_cost = cash_flows.first().map_or(0.0, |&flow| -flow);
    let annual_savings = cash_flows.get(1).copied().unwrap_or(0.0);
    if total_cost == 0.0 || annual_savings == 0.0 {
        debug!(total_cost, annual_savings, "degenerate cash flows, IRR undefined");
        return IRR_SENTINEL;
    }
    irr(cash_flows).unwrap_or_else(|| {
        debug!(
            total_cost,
            annual_savings,
            min_rate = MIN_RATE,
            max_rate = MAX_RATE,
            "no IRR root found in rate bracket"
        );
        IRR_SENTINEL
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::finance::cashflow::cash_flows;

    #[test]
    fn two_period_root_is_exact() {
        // -100 + 110 / (1 + r) = 0 → r = 0.1
        let r = irr(&[-100.0, 110.0]);
        assert_relative_eq!(r.unwrap_or(f64::NAN), 0.1, max_relative = 1e-9);
    }

    #[test]
    fn root_zeroes_npv() {
        let flows = cash_flows(89_460.0, 15_840.0, 15);
        let r = irr(&flows).unwrap_or(f64::NAN);
        assert!(net_present_value(r, &flows).abs() < 1e-3);
    }

    #[test]
    fn long_horizon_converges() {
        let flows = cash_flows(250_000.0, 21_000.0, 100);
        let r = irr(&flows).unwrap_or(f64::NAN);
        assert!(r > 0.0 && r < 0.1);
        assert!(net_present_value(r, &flows).abs() < 1e-3);
    }

    #[test]
    fn losing_project_has_negative_irr() {
        // 5 * 100 < 1000: money is lost even undiscounted
        let flows = cash_flows(1000.0, 100.0, 5);
        let r = irr(&flows).unwrap_or(f64::NAN);
        assert!(r < 0.0 && r > MIN_RATE);
    }

    #[test]
    fn no_sign_change_has_no_root() {
        assert_eq!(irr(&[100.0, 10.0, 10.0]), None);
        assert_eq!(irr(&[-100.0, -10.0]), None);
    }

    #[test]
    fn root_beyond_bracket_reports_sentinel() {
        // Pays back 100x in the first year: IRR far above 1000%
        assert_eq!(project_irr(&cash_flows(1.0, 100.0, 3)), IRR_SENTINEL);
    }

    #[test]
    fn degenerate_inputs_report_sentinel() {
        assert_eq!(project_irr(&cash_flows(0.0, 100.0, 5)), IRR_SENTINEL);
        assert_eq!(project_irr(&cash_flows(100.0, 0.0, 5)), IRR_SENTINEL);
        assert_eq!(project_irr(&[-100.0]), IRR_SENTINEL);
        assert_eq!(project_irr(&[]), IRR_SENTINEL);
    }

    #[test]
    fn project_irr_reads_cost_and_savings_from_series() {
        let flows = cash_flows(89_460.0, 15_840.0, 15);
        assert_relative_eq!(
            project_irr(&flows),
            irr(&flows).unwrap_or(f64::NAN),
            max_relative = 1e-12
        );
    }
}
