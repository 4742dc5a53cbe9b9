//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use shaver::finance::{CostModel, InputParameters};

/// Reference parameters: 72 kW peak for 2.5 h, 60 kW / 210 kWh battery,
/// 22 $/kW demand charge, 426 $/kWh blended cost, 8% over 15 years.
pub fn reference_params() -> InputParameters {
    InputParameters {
        peak_load_kw: 72.0,
        peak_duration_hours: 2.5,
        battery_power_kw: 60.0,
        battery_capacity_kwh: 210.0,
        peak_demand_charge: 22.0,
        cost_model: CostModel::blended(426.0),
        discount_rate_percent: 8.0,
        analysis_years: 15,
    }
}

/// Grid of valid parameter sets spanning power- and energy-limited systems,
/// both cost models, zero charges, and short to long horizons.
pub fn parameter_grid() -> Vec<InputParameters> {
    let mut grid = Vec::new();
    for peak_load_kw in [10.0, 72.0, 1000.0] {
        for (battery_power_kw, battery_capacity_kwh) in
            [(0.0, 0.0), (10.0, 10.0), (60.0, 210.0), (1000.0, 2000.0)]
        {
            for peak_demand_charge in [0.0, 5.0, 22.0, 50.0] {
                for cost_model in [
                    CostModel::blended(426.0),
                    CostModel::decomposed(300.0, 200.0, 0.3),
                    CostModel::decomposed(100.0, 0.0, 1.0),
                ] {
                    for (discount_rate_percent, analysis_years) in
                        [(0.0, 1), (8.0, 15), (20.0, 30), (3.5, 100)]
                    {
                        grid.push(InputParameters {
                            peak_load_kw,
                            peak_duration_hours: 2.5,
                            battery_power_kw,
                            battery_capacity_kwh,
                            peak_demand_charge,
                            cost_model,
                            discount_rate_percent,
                            analysis_years,
                        });
                    }
                }
            }
        }
    }
    grid
}

/// Reference IRR of a flat annuity by plain bisection on the closed-form
/// present value `savings * (1 - (1 + r)^-n) / r`.
pub fn reference_annuity_irr(total_cost: f64, annual_savings: f64, years: usize) -> f64 {
    let npv = |r: f64| {
        let pv = if r == 0.0 {
            annual_savings * years as f64
        } else {
            annual_savings * (1.0 - (1.0 + r).powf(-(years as f64))) / r
        };
        pv - total_cost
    };
    let (mut lo, mut hi) = (-0.99_f64, 10.0_f64);
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if npv(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
