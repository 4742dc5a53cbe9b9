//! Integration tests for the reference peak-shaving scenario.

mod common;

use approx::assert_relative_eq;
use shaver::config::ScenarioConfig;
use shaver::finance::sizing::peak_reduction;
use shaver::finance::{CostModel, evaluate};

#[test]
fn reference_scenario_sizing_and_savings() {
    let params = common::reference_params();
    let reduction = peak_reduction(&params);
    assert_eq!(reduction.power_limited_kw, 60.0);
    assert_eq!(reduction.energy_limited_kw, 72.0);

    let result = evaluate(&params);
    assert_eq!(result.peak_reduction_kw, 60.0);
    assert_eq!(result.annual_savings, 15_840.0);
    assert_eq!(result.system_cost.total_cost, 89_460.0);
    assert_eq!(result.npv_values[0], -89_460.0);
}

#[test]
fn reference_scenario_matches_discounted_cash_flow() {
    let result = evaluate(&common::reference_params());

    let mut expected = -89_460.0;
    for year in 1..=15 {
        expected += 15_840.0 / 1.08_f64.powi(year);
        assert_relative_eq!(
            result.npv_values[year as usize],
            expected,
            max_relative = 1e-9
        );
    }

    assert_eq!(result.payback_period_years, 8.0);
    assert!(result.npv_values[7] < 0.0);
    assert!(result.npv_values[8] >= 0.0);

    let reference_irr = common::reference_annuity_irr(89_460.0, 15_840.0, 15);
    assert_relative_eq!(result.irr, reference_irr, max_relative = 1e-6);
    assert!(result.irr > 0.15 && result.irr < 0.16);
}

#[test]
fn determinism_two_identical_runs_produce_identical_results() {
    let params = common::reference_params();
    let first = evaluate(&params);
    let second = evaluate(&params);
    assert_eq!(first, second);
    for (a, b) in first.npv_values.iter().zip(&second.npv_values) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(first.irr.to_bits(), second.irr.to_bits());
}

#[test]
fn blended_preset_matches_reference_parameters() {
    let params = ScenarioConfig::blended().to_params();
    assert_eq!(params, common::reference_params());
}

#[test]
fn energy_limited_preset_never_pays_back_but_earns_positive_irr() {
    let params = ScenarioConfig::energy_limited().to_params();
    let result = evaluate(&params);
    // 200 kWh * 0.9 / 4 h = 45 kW, well below the 100 kW inverter
    assert_relative_eq!(result.peak_reduction_kw, 45.0, max_relative = 1e-12);
    assert!(result.payback_period_years.is_infinite());
    assert!(result.irr > 0.0 && result.irr < params.discount_rate());
}

#[test]
fn cheaper_system_pays_back_sooner() {
    let mut params = common::reference_params();
    let expensive = evaluate(&params);
    params.cost_model = CostModel::blended(200.0);
    let cheap = evaluate(&params);
    assert!(cheap.payback_period_years < expensive.payback_period_years);
    assert!(cheap.irr > expensive.irr);
}
