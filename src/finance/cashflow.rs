//! Annual savings and the cash-flow series.

/// Months billed per year under a flat monthly demand charge.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annual demand-charge savings for a given peak reduction.
///
/// `reduction_kw * peak_demand_charge` per month, twelve months a year.
pub fn annual_savings(reduction_kw: f64, peak_demand_charge: f64) -> f64 {
    let monthly = reduction_kw * peak_demand_charge;
    monthly * MONTHS_PER_YEAR
}

/// Cash-flow series with a single upfront outlay and flat annual benefit.
///
/// Returns `[-total_cost, annual_savings, ..., annual_savings]` with
/// `analysis_years` savings entries. No inflation, mid-life replacement, or
/// salvage value.
pub fn cash_flows(total_cost: f64, annual_savings: f64, analysis_years: usize) -> Vec<f64> {
    let mut flows = Vec::with_capacity(analysis_years + 1);
    flows.push(-total_cost);
    flows.extend(std::iter::repeat_n(annual_savings, analysis_years));
    flows
}
