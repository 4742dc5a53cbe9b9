//! Plain-text rendering of an evaluation.

use std::fmt;

use super::sizing::ROUND_TRIP_EFFICIENCY;
use super::types::{CashFlowResult, CostModel, InputParameters};

/// Human-readable report pairing the inputs with their evaluation.
///
/// Every metric sits on its own `label: value unit` line so the output can
/// be scraped by scripts.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Parameters that produced `result`.
    pub params: &'a InputParameters,
    /// Evaluation outcome.
    pub result: &'a CashFlowResult,
}

impl<'a> Report<'a> {
    /// Bundles parameters and result for display.
    pub fn new(params: &'a InputParameters, result: &'a CashFlowResult) -> Self {
        Self { params, result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params;
        let r = self.result;
        let cost = &r.system_cost;

        writeln!(f, "--- System Costs ---")?;
        writeln!(f, "Battery cost:          {:.0} $", cost.battery_cost)?;
        writeln!(f, "Inverter cost:         {:.0} $", cost.inverter_cost)?;
        writeln!(f, "Installation cost:     {:.0} $", cost.installation_cost)?;
        writeln!(f, "Total system cost:     {:.0} $", cost.total_cost)?;

        writeln!(f, "\n--- Performance Metrics ---")?;
        writeln!(f, "Annual savings:        {:.0} $", r.annual_savings)?;
        writeln!(f, "Peak reduction:        {:.1} kW", r.peak_reduction_kw)?;
        writeln!(
            f,
            "New peak value:        {:.1} kW",
            p.peak_load_kw - r.peak_reduction_kw
        )?;

        writeln!(f, "\n--- Financial Metrics ---")?;
        if r.payback_period_years.is_finite() {
            writeln!(
                f,
                "Simple payback:        {:.1} years",
                r.payback_period_years
            )?;
        } else {
            writeln!(f, "Simple payback:        never")?;
        }
        writeln!(f, "IRR:                   {:.1}%", r.irr * 100.0)?;
        writeln!(f, "Discount rate:         {:.1}%", p.discount_rate_percent)?;
        writeln!(f, "Final NPV:             {:.0} $", r.final_npv())?;
        if let Some(year) = r.payback_year() {
            writeln!(f, "Breakeven occurs at year {year}")?;
        }

        writeln!(f, "\n--- Assumptions ---")?;
        match p.cost_model {
            CostModel::Blended {
                system_cost_per_kwh,
            } => writeln!(f, "- Blended system cost: {system_cost_per_kwh} $/kWh")?,
            CostModel::Decomposed {
                battery_cost_per_kwh,
                inverter_cost_per_kw,
                installation_factor,
            } => {
                writeln!(f, "- Battery cost: {battery_cost_per_kwh} $/kWh")?;
                writeln!(f, "- Inverter cost: {inverter_cost_per_kw} $/kW")?;
                writeln!(
                    f,
                    "- Installation: {:.0}% of equipment cost",
                    installation_factor * 100.0
                )?;
            }
        }
        writeln!(
            f,
            "- {}% discount rate over {} years",
            p.discount_rate_percent, p.analysis_years
        )?;
        writeln!(f, "- Same peak demand charge every month")?;
        writeln!(
            f,
            "- {:.0}% round-trip battery efficiency",
            ROUND_TRIP_EFFICIENCY * 100.0
        )?;
        write!(f, "- All costs and savings in current dollars")
    }
}
