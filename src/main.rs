//! SHAVER entry point: CLI wiring and config-driven evaluation.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use shaver::config::ScenarioConfig;
use shaver::finance::{Report, evaluate};
use shaver::io::export::export_csv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Storage Harnessing And Value Estimation Return tool.
///
/// Evaluates whether a battery shaving a facility's peak demand pays for
/// itself. If no --scenario or --preset is given, the baseline preset is used.
#[derive(Parser)]
#[command(name = "shaver", version, about)]
struct Args {
    /// Load scenario from TOML config file.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    scenario: Option<PathBuf>,

    /// Use a built-in preset (baseline, blended, energy_limited).
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Override the discount rate (percent).
    #[arg(long, value_name = "PERCENT")]
    discount_rate: Option<f64>,

    /// Override the analysis horizon (years).
    #[arg(long, value_name = "YEARS")]
    years: Option<usize>,

    /// Export the cumulative NPV curve to CSV.
    #[arg(long, value_name = "PATH")]
    npv_out: Option<PathBuf>,

    /// Start REST API server after evaluation.
    #[cfg(feature = "api")]
    #[arg(long)]
    serve: bool,

    /// API server port.
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

impl Args {
    /// Resolves the scenario: --scenario takes priority, then --preset, then
    /// the baseline default. Overrides are applied on top.
    fn resolve_scenario(&self) -> Result<ScenarioConfig, shaver::config::ConfigError> {
        let mut scenario = if let Some(path) = &self.scenario {
            ScenarioConfig::from_toml_file(path)?
        } else if let Some(name) = &self.preset {
            ScenarioConfig::from_preset(name)?
        } else {
            ScenarioConfig::baseline()
        };

        if let Some(rate) = self.discount_rate {
            scenario.finance.discount_rate_percent = rate;
        }
        if let Some(years) = self.years {
            scenario.finance.analysis_years = years;
        }
        Ok(scenario)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let scenario = match args.resolve_scenario() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let params = scenario.to_params();
    let result = evaluate(&params);
    info!(
        total_cost = result.system_cost.total_cost,
        annual_savings = result.annual_savings,
        irr = result.irr,
        "evaluation complete"
    );
    if result.payback_year().is_none() {
        warn!(
            analysis_years = params.analysis_years,
            "system does not pay back within the analysis period"
        );
    }

    println!("{}", Report::new(&params, &result));

    if let Some(path) = &args.npv_out {
        export_csv(&result, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        info!(path = %path.display(), "NPV curve written");
    }

    #[cfg(feature = "api")]
    if args.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(shaver::api::AppState { params, result });
        let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
        let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
        rt.block_on(shaver::api::serve(state, addr))
            .with_context(|| format!("API server on {addr} failed"))?;
    }

    Ok(())
}
