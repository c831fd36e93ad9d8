//! Check command implementation
//!
//! Reports the effective configuration after validation.

use pricer_barrier::BarrierPricingConfig;
use tracing::{info, warn};

use crate::Result;

/// Run the check command
pub fn run(config: &BarrierPricingConfig) -> Result<()> {
    config.validate()?;

    println!("{}", summary(config));

    if starts_breached(config) {
        warn!(
            "Initial price {} already breaches the {} barrier at {}",
            config.simulation.initial_price,
            config.contract.barrier_direction,
            config.contract.barrier_level
        );
    }

    info!("Configuration OK");
    Ok(())
}

/// True when t₀ alone triggers the barrier on every path.
pub fn starts_breached(config: &BarrierPricingConfig) -> bool {
    config
        .contract
        .is_breached(config.simulation.initial_price)
}

/// Human-readable description of the configuration.
pub fn summary(config: &BarrierPricingConfig) -> String {
    let sim = &config.simulation;
    let contract = &config.contract;
    let seed = sim
        .random_seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());

    [
        "Simulation".to_string(),
        format!("  S0:          {}", sim.initial_price),
        format!("  drift:       {}", sim.drift),
        format!("  volatility:  {}", sim.volatility),
        format!("  horizon:     {} (dt = {:.6})", sim.horizon, sim.dt()),
        format!("  grid:        {} paths x {} steps", sim.num_paths, sim.num_steps),
        format!("  seed:        {}", seed),
        "Contract".to_string(),
        format!(
            "  type:        {} {} {}",
            contract.barrier_direction, contract.knock_type, contract.option_kind
        ),
        format!("  strike:      {}", contract.strike),
        format!("  barrier:     {}", contract.barrier_level),
        format!("  rate:        {}", contract.risk_free_rate),
    ]
    .join("\n")
}
