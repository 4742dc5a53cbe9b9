//! Core engine types: input parameters, cost model, and the evaluation result.

use serde::{Deserialize, Serialize};

/// IRR reported when the cash-flow series has no usable root.
///
/// Covers a zero-cost system, zero savings, a rate bracket without a sign
/// change, and a root finder that runs out of iterations.
pub const IRR_SENTINEL: f64 = 0.0;

/// Capital cost convention for the storage system.
///
/// Both variants feed the same downstream computation; see
/// [`system_cost`](super::cost::system_cost).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CostModel {
    /// One all-in price per kWh of nameplate capacity.
    Blended {
        /// All-in system cost ($/kWh).
        system_cost_per_kwh: f64,
    },
    /// Separate battery and inverter prices plus an installation markup.
    Decomposed {
        /// Battery cost ($/kWh).
        battery_cost_per_kwh: f64,
        /// Inverter cost ($/kW).
        inverter_cost_per_kw: f64,
        /// Installation cost as a fraction of equipment cost.
        installation_factor: f64,
    },
}

impl CostModel {
    /// Builds the blended cost model.
    pub fn blended(system_cost_per_kwh: f64) -> Self {
        Self::Blended {
            system_cost_per_kwh,
        }
    }

    /// Builds the decomposed cost model.
    ///
    /// # Arguments
    ///
    /// * `battery_cost_per_kwh` - Battery price ($/kWh)
    /// * `inverter_cost_per_kw` - Inverter price ($/kW)
    /// * `installation_factor` - Markup applied to battery + inverter cost
    pub fn decomposed(
        battery_cost_per_kwh: f64,
        inverter_cost_per_kw: f64,
        installation_factor: f64,
    ) -> Self {
        Self::Decomposed {
            battery_cost_per_kwh,
            inverter_cost_per_kw,
            installation_factor,
        }
    }
}

/// Physical and financial parameters of one evaluation.
///
/// The engine performs no range checks. Callers must enforce:
/// `peak_load_kw > 0`, `peak_duration_hours > 0`, `analysis_years >= 1`, and
/// all other numeric fields `>= 0`. Results for parameters outside that
/// domain are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// Facility peak demand before storage (kW).
    pub peak_load_kw: f64,
    /// Duration the peak persists each cycle (hours).
    pub peak_duration_hours: f64,
    /// Inverter/battery power rating (kW).
    pub battery_power_kw: f64,
    /// Usable nameplate energy (kWh).
    pub battery_capacity_kwh: f64,
    /// Utility charge per kW of monthly peak demand ($/kW).
    pub peak_demand_charge: f64,
    /// Capital cost convention.
    pub cost_model: CostModel,
    /// Annual NPV discount rate in percent (8.0 means 8%).
    pub discount_rate_percent: f64,
    /// Number of years in the cash-flow horizon.
    pub analysis_years: usize,
}

impl InputParameters {
    /// Discount rate as a fraction.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate_percent / 100.0
    }
}

/// Capital cost of the storage system, split by component.
///
/// Sub-costs are zero under [`CostModel::Blended`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SystemCostBreakdown {
    /// Battery cost ($).
    pub battery_cost: f64,
    /// Inverter cost ($).
    pub inverter_cost: f64,
    /// Installation cost ($).
    pub installation_cost: f64,
    /// Total capital cost ($).
    pub total_cost: f64,
}

/// Which physical rating caps the achievable peak reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitingFactor {
    /// Inverter power rating (or the peak itself).
    Power,
    /// Stored energy spread over the peak duration.
    Energy,
}

/// Sized peak-demand reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakReduction {
    /// Reduction allowed by the power rating (kW).
    pub power_limited_kw: f64,
    /// Reduction allowed by the stored energy (kW).
    pub energy_limited_kw: f64,
    /// Achievable reduction, the smaller of the two (kW).
    pub actual_kw: f64,
    /// Facility peak after shaving (kW).
    pub new_peak_kw: f64,
    /// Binding constraint. Ties resolve to [`LimitingFactor::Power`].
    pub limited_by: LimitingFactor,
}

/// Outcome of one evaluation.
///
/// Invariants: `years` and `npv_values` both hold `analysis_years + 1`
/// entries, and `npv_values[0] == -system_cost.total_cost`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowResult {
    /// Year indices `0..=analysis_years`.
    pub years: Vec<usize>,
    /// Cumulative discounted NPV at the end of each year ($).
    pub npv_values: Vec<f64>,
    /// Savings for every year from 1 on ($).
    pub annual_savings: f64,
    /// Capital cost breakdown.
    pub system_cost: SystemCostBreakdown,
    /// Achievable peak-demand reduction (kW).
    pub peak_reduction_kw: f64,
    /// Internal rate of return as a fraction, or [`IRR_SENTINEL`].
    pub irr: f64,
    /// First year with non-negative cumulative NPV, or `f64::INFINITY`.
    ///
    /// Serialized as `null` when infinite.
    pub payback_period_years: f64,
}

impl CashFlowResult {
    /// Payback year, `None` when the project never breaks even in the horizon.
    pub fn payback_year(&self) -> Option<usize> {
        self.payback_period_years
            .is_finite()
            .then_some(self.payback_period_years as usize)
    }

    /// Cumulative NPV at the end of the horizon.
    pub fn final_npv(&self) -> f64 {
        self.npv_values.last().copied().unwrap_or_default()
    }

    /// Number of years in the horizon.
    pub fn analysis_years(&self) -> usize {
        self.years.len().saturating_sub(1)
    }
}
