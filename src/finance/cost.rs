//! Capital cost of the storage system.

use super::types::{CostModel, InputParameters, SystemCostBreakdown};

/// Computes the system cost breakdown for either cost convention.
///
/// Blended: `capacity * system_cost_per_kwh`, sub-costs zero.
/// Decomposed: battery and inverter cost plus `installation_factor` times
/// their sum.
pub fn system_cost(params: &InputParameters) -> SystemCostBreakdown {
    match params.cost_model {
        CostModel::Blended {
            system_cost_per_kwh,
        } => SystemCostBreakdown {
            total_cost: params.battery_capacity_kwh * system_cost_per_kwh,
            ..SystemCostBreakdown::default()
        },
        CostModel::Decomposed {
            battery_cost_per_kwh,
            inverter_cost_per_kw,
            installation_factor,
        } => {
            let battery_cost = params.battery_capacity_kwh * battery_cost_per_kwh;
            let inverter_cost = params.battery_power_kw * inverter_cost_per_kw;
            let installation_cost = (battery_cost + inverter_cost) * installation_factor;
            SystemCostBreakdown {
                battery_cost,
                inverter_cost,
                installation_cost,
                total_cost: battery_cost + inverter_cost + installation_cost,
            }
        }
    }
}
