//! Net present value: cumulative per-year curve and series NPV.

/// Discount factor `(1 + rate)^year`.
fn growth(rate: f64, year: usize) -> f64 {
    (1.0 + rate).powf(year as f64)
}

/// Cumulative discounted NPV at the end of each year.
///
/// `npv[0] = -total_cost`, then every year adds
/// `annual_savings / (1 + discount_rate)^year` to the previous entry. Each
/// entry therefore includes every earlier year's discounted contribution.
///
/// # Arguments
///
/// * `total_cost` - Upfront capital outlay at year 0
/// * `annual_savings` - Flat benefit for years `1..=analysis_years`
/// * `discount_rate` - Annual discount rate as a fraction
/// * `analysis_years` - Horizon length
///
/// # Returns
///
/// `analysis_years + 1` cumulative values.
pub fn cumulative_npv(
    total_cost: f64,
    annual_savings: f64,
    discount_rate: f64,
    analysis_years: usize,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(analysis_years + 1);
    let mut running = -total_cost;
    values.push(running);
    for year in 1..=analysis_years {
        running += annual_savings / growth(discount_rate, year);
        values.push(running);
    }
    values
}

/// NPV of a cash-flow series whose first entry falls at year 0.
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(year, cf)| cf / growth(rate, year))
        .sum()
}

/// Derivative of [`net_present_value`] with respect to `rate`.
pub fn net_present_value_slope(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(year, cf)| -(year as f64) * cf / growth(rate, year + 1))
        .sum()
}
