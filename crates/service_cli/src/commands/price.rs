//! Price command implementation
//!
//! Simulates paths, evaluates the barrier contract and prints the premium
//! together with its Monte Carlo error statistics.

use clap::ValueEnum;
use pricer_barrier::{BarrierPricingConfig, PricingResult};
use serde::Serialize;
use tracing::info;

use crate::Result;

/// Output format for pricing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// JSON document emitted by `price --format json`
#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    num_paths: usize,
    num_steps: usize,
    random_seed: Option<u64>,
    confidence_95: f64,
    #[serde(flatten)]
    result: &'a PricingResult,
}

/// Run the price command
pub fn run(config: &BarrierPricingConfig, format: OutputFormat) -> Result<()> {
    info!("Starting pricing...");
    info!(
        "  {} {} {} (K={}, B={})",
        config.contract.barrier_direction,
        config.contract.knock_type,
        config.contract.option_kind,
        config.contract.strike,
        config.contract.barrier_level
    );
    info!(
        "  Monte Carlo: {} paths x {} steps",
        config.simulation.num_paths, config.simulation.num_steps
    );

    let result = config.price()?;

    match format {
        OutputFormat::Table => println!("{}", render_table(&result)),
        OutputFormat::Json => println!("{}", render_json(config, &result)?),
    }

    info!("Pricing complete");
    Ok(())
}

/// Formats a result as a boxed table.
pub fn render_table(result: &PricingResult) -> String {
    let rows = [
        ("Premium", format!("{:.6}", result.premium)),
        ("Std error", format!("{:.6}", result.std_error)),
        ("95% half-width", format!("{:.6}", result.confidence_95())),
        ("Breach prob", format!("{:.4}", result.breach_probability)),
        ("Vanilla", format!("{:.6}", result.vanilla_premium)),
        ("Paths", result.n_paths.to_string()),
    ];

    let mut out = String::new();
    out.push_str("┌────────────────┬──────────────┐\n");
    out.push_str("│ Metric         │ Value        │\n");
    out.push_str("├────────────────┼──────────────┤\n");
    for (label, value) in rows {
        out.push_str(&format!("│ {:<14} │ {:>12} │\n", label, value));
    }
    out.push_str("└────────────────┴──────────────┘");
    out
}

/// Formats a result as pretty-printed JSON.
pub fn render_json(config: &BarrierPricingConfig, result: &PricingResult) -> Result<String> {
    let report = PriceReport {
        num_paths: config.simulation.num_paths,
        num_steps: config.simulation.num_steps,
        random_seed: config.simulation.random_seed,
        confidence_95: result.confidence_95(),
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
