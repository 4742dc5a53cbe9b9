//! Evaluation pipeline from input parameters to investment metrics.

use tracing::debug;

use super::cashflow::{annual_savings, cash_flows};
use super::cost::system_cost;
use super::irr::project_irr;
use super::npv::cumulative_npv;
use super::payback::payback_period;
use super::sizing::peak_reduction;
use super::types::{CashFlowResult, InputParameters};

/// Evaluates one peak-shaving investment.
///
/// Pure function of `params`: no shared state, no caching, and identical
/// input always yields a bit-identical result. Degenerate economics never
/// fail; they surface as `f64::INFINITY` payback and the IRR sentinel.
///
/// # Examples
///
/// ```
/// use shaver::finance::{CostModel, InputParameters, evaluate};
///
/// let params = InputParameters {
///     peak_load_kw: 72.0,
///     peak_duration_hours: 2.5,
///     battery_power_kw: 60.0,
///     battery_capacity_kwh: 210.0,
///     peak_demand_charge: 22.0,
///     cost_model: CostModel::blended(426.0),
///     discount_rate_percent: 8.0,
///     analysis_years: 15,
/// };
/// let result = evaluate(&params);
/// assert_eq!(result.annual_savings, 15_840.0);
/// assert_eq!(result.npv_values[0], -89_460.0);
/// assert_eq!(result.payback_year(), Some(8));
/// ```
pub fn evaluate(params: &InputParameters) -> CashFlowResult {
    let cost = system_cost(params);
    let reduction = peak_reduction(params);
    let savings = annual_savings(reduction.actual_kw, params.peak_demand_charge);
    debug!(
        total_cost = cost.total_cost,
        reduction_kw = reduction.actual_kw,
        limited_by = ?reduction.limited_by,
        annual_savings = savings,
        "sized system"
    );

    let npv_values = cumulative_npv(
        cost.total_cost,
        savings,
        params.discount_rate(),
        params.analysis_years,
    );
    let payback_period_years = payback_period(&npv_values);
    let flows = cash_flows(cost.total_cost, savings, params.analysis_years);
    let irr = project_irr(&flows);
    debug!(irr, payback_period_years, "evaluated cash flows");

    CashFlowResult {
        years: (0..=params.analysis_years).collect(),
        npv_values,
        annual_savings: savings,
        system_cost: cost,
        peak_reduction_kw: reduction.actual_kw,
        irr,
        payback_period_years,
    }
}
