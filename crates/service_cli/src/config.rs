//! Configuration loading
//!
//! The configuration file is TOML with `[simulation]` and `[contract]`
//! tables that map directly onto [`BarrierPricingConfig`]:
//!
//! ```toml
//! diagnostics = false
//!
//! [simulation]
//! initial_price = 65.0
//! drift = 0.06
//! volatility = 0.2
//! horizon = 1.0
//! num_steps = 252
//! num_paths = 100000
//! random_seed = 42
//!
//! [contract]
//! strike = 78.0
//! barrier_level = 85.0
//! barrier_direction = "up"
//! knock_type = "knock_out"
//! option_kind = "call"
//! risk_free_rate = 0.06
//! ```
//!
//! Command-line overrides take precedence over file values.

use std::path::Path;

use clap::Args;
use pricer_barrier::BarrierPricingConfig;
use tracing::debug;

use crate::{CliError, Result};

/// Command-line overrides for file values
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Overrides {
    /// Random seed (overrides `simulation.random_seed`)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of Monte Carlo paths (overrides `simulation.num_paths`)
    #[arg(short, long)]
    pub num_paths: Option<usize>,

    /// Volatility (overrides `simulation.volatility`)
    #[arg(long)]
    pub volatility: Option<f64>,
}

impl Overrides {
    /// Applies every override that was given.
    pub fn apply(&self, config: &mut BarrierPricingConfig) {
        if let Some(seed) = self.seed {
            config.simulation.random_seed = Some(seed);
        }
        if let Some(num_paths) = self.num_paths {
            config.simulation.num_paths = num_paths;
        }
        if let Some(volatility) = self.volatility {
            config.simulation.volatility = volatility;
        }
    }
}

/// Parses a TOML document into a pricing configuration.
pub fn parse_config(content: &str) -> Result<BarrierPricingConfig> {
    Ok(toml::from_str(content)?)
}

/// Loads the configuration file, applies overrides and validates the result.
pub fn load_config(path: &Path, overrides: &Overrides) -> Result<BarrierPricingConfig> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut config = parse_config(&content)?;
    overrides.apply(&mut config);
    config.validate()?;

    debug!(path = %path.display(), ?overrides, "configuration loaded");
    Ok(config)
}
