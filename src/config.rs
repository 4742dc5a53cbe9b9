//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::finance::{CostModel, InputParameters};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Facility peak load.
    #[serde(default)]
    pub load: LoadConfig,
    /// Battery ratings.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Utility demand tariff.
    #[serde(default)]
    pub tariff: TariffConfig,
    /// Capital cost inputs.
    #[serde(default)]
    pub costs: CostsConfig,
    /// Discounting and horizon.
    #[serde(default)]
    pub finance: FinanceConfig,
}

/// Facility peak load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Peak demand before storage (kW, > 0).
    pub peak_load_kw: f64,
    /// Duration the peak persists each cycle (hours, > 0).
    pub peak_duration_hours: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            peak_load_kw: 72.0,
            peak_duration_hours: 2.5,
        }
    }
}

/// Battery ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Inverter/battery power rating (kW).
    pub power_kw: f64,
    /// Usable nameplate energy (kWh).
    pub capacity_kwh: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            power_kw: 60.0,
            capacity_kwh: 210.0,
        }
    }
}

/// Utility demand tariff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Monthly charge per kW of peak demand ($/kW).
    pub peak_demand_charge: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            peak_demand_charge: 22.0,
        }
    }
}

/// Cost model selector in the `[costs]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModelKind {
    /// Single all-in price per kWh.
    Blended,
    /// Battery, inverter, and installation priced separately.
    #[default]
    Decomposed,
}

/// Capital cost inputs.
///
/// `model` selects which fields are read: `"blended"` uses
/// `system_cost_per_kwh`, `"decomposed"` uses the other three. Any other
/// model name is rejected when the TOML is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostsConfig {
    /// Cost model: `"blended"` or `"decomposed"`.
    pub model: CostModelKind,
    /// All-in system cost ($/kWh), blended model.
    pub system_cost_per_kwh: f64,
    /// Battery cost ($/kWh), decomposed model.
    pub battery_cost_per_kwh: f64,
    /// Inverter cost ($/kW), decomposed model.
    pub inverter_cost_per_kw: f64,
    /// Installation markup on equipment cost (0.0–1.0), decomposed model.
    pub installation_factor: f64,
}

impl Default for CostsConfig {
    fn default() -> Self {
        Self {
            model: CostModelKind::Decomposed,
            system_cost_per_kwh: 426.0,
            battery_cost_per_kwh: 300.0,
            inverter_cost_per_kw: 200.0,
            installation_factor: 0.3,
        }
    }
}

/// Discounting and horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinanceConfig {
    /// Annual discount rate in percent.
    pub discount_rate_percent: f64,
    /// Analysis horizon in years (>= 1).
    pub analysis_years: usize,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            discount_rate_percent: 8.0,
            analysis_years: 15,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"load.peak_load_kw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Upper bound on the analysis horizon.
pub const MAX_ANALYSIS_YEARS: usize = 100;

impl ScenarioConfig {
    /// Returns the baseline scenario: a 60 kW / 210 kWh system shaving a
    /// 72 kW peak, priced with separate battery and inverter costs.
    pub fn baseline() -> Self {
        Self {
            load: LoadConfig::default(),
            battery: BatteryConfig::default(),
            tariff: TariffConfig::default(),
            costs: CostsConfig::default(),
            finance: FinanceConfig::default(),
        }
    }

    /// Returns the blended preset: the baseline system priced at a single
    /// all-in 426 $/kWh.
    pub fn blended() -> Self {
        Self {
            costs: CostsConfig {
                model: CostModelKind::Blended,
                ..CostsConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the energy-limited preset: a long peak drained by a small
    /// battery, so stored energy rather than inverter power caps the shave.
    pub fn energy_limited() -> Self {
        Self {
            load: LoadConfig {
                peak_load_kw: 150.0,
                peak_duration_hours: 4.0,
            },
            battery: BatteryConfig {
                power_kw: 100.0,
                capacity_kwh: 200.0,
            },
            tariff: TariffConfig {
                peak_demand_charge: 18.0,
            },
            finance: FinanceConfig {
                analysis_years: 20,
                ..FinanceConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "blended", "energy_limited"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "blended" => Ok(Self::blended()),
            "energy_limited" => Ok(Self::energy_limited()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. A valid
    /// configuration converts into parameters inside the engine's domain.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        require_positive(&mut errors, "load.peak_load_kw", self.load.peak_load_kw);
        require_positive(
            &mut errors,
            "load.peak_duration_hours",
            self.load.peak_duration_hours,
        );
        require_non_negative(&mut errors, "battery.power_kw", self.battery.power_kw);
        require_non_negative(&mut errors, "battery.capacity_kwh", self.battery.capacity_kwh);
        require_non_negative(
            &mut errors,
            "tariff.peak_demand_charge",
            self.tariff.peak_demand_charge,
        );
        require_non_negative(
            &mut errors,
            "finance.discount_rate_percent",
            self.finance.discount_rate_percent,
        );

        let c = &self.costs;
        match c.model {
            CostModelKind::Blended => require_non_negative(
                &mut errors,
                "costs.system_cost_per_kwh",
                c.system_cost_per_kwh,
            ),
            CostModelKind::Decomposed => {
                require_non_negative(
                    &mut errors,
                    "costs.battery_cost_per_kwh",
                    c.battery_cost_per_kwh,
                );
                require_non_negative(
                    &mut errors,
                    "costs.inverter_cost_per_kw",
                    c.inverter_cost_per_kw,
                );
                if !(0.0..=1.0).contains(&c.installation_factor) {
                    errors.push(ConfigError::new(
                        "costs.installation_factor",
                        "must be in [0.0, 1.0]",
                    ));
                }
            }
        }

        let fin = &self.finance;
        if fin.discount_rate_percent > 100.0 {
            errors.push(ConfigError::new(
                "finance.discount_rate_percent",
                "must be <= 100",
            ));
        }
        if !(1..=MAX_ANALYSIS_YEARS).contains(&fin.analysis_years) {
            errors.push(ConfigError::new(
                "finance.analysis_years",
                format!("must be in [1, {MAX_ANALYSIS_YEARS}]"),
            ));
        }

        errors
    }

    /// Converts the scenario into engine parameters.
    ///
    /// Call [`validate`](Self::validate) first.
    pub fn to_params(&self) -> InputParameters {
        let c = &self.costs;
        let cost_model = match c.model {
            CostModelKind::Blended => CostModel::blended(c.system_cost_per_kwh),
            CostModelKind::Decomposed => CostModel::decomposed(
                c.battery_cost_per_kwh,
                c.inverter_cost_per_kw,
                c.installation_factor,
            ),
        };

        InputParameters {
            peak_load_kw: self.load.peak_load_kw,
            peak_duration_hours: self.load.peak_duration_hours,
            battery_power_kw: self.battery.power_kw,
            battery_capacity_kwh: self.battery.capacity_kwh,
            peak_demand_charge: self.tariff.peak_demand_charge,
            cost_model,
            discount_rate_percent: self.finance.discount_rate_percent,
            analysis_years: self.finance.analysis_years,
        }
    }
}

fn require_positive(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(ConfigError::new(field, "must be > 0"));
    }
}

fn require_non_negative(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !(value.is_finite() && value >= 0.0) {
        errors.push(ConfigError::new(field, "must be >= 0"));
    }
}
