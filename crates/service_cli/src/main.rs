//! Barrier CLI - Command Line Pricing of Barrier Options
//!
//! Operational entry point for the `pricer_barrier` library.
//!
//! # Commands
//!
//! - `barrier price` - Price the configured contract
//! - `barrier export --output <file>` - Write per-path results as CSV
//! - `barrier check` - Validate and display the configuration
//!
//! Every command reads a TOML configuration (`--config`, default
//! `barrier.toml`); `--seed`, `--num-paths` and `--volatility` override it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::OutputFormat;
use config::Overrides;

/// Monte Carlo barrier option pricer
#[derive(Parser)]
#[command(name = "barrier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "barrier.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the configured barrier option
    Price {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Export per-path extremum, breach flag and payoff as CSV
    Export {
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Check the configuration
    Check {
        #[command(flatten)]
        overrides: Overrides,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { format, overrides } => {
            let config = config::load_config(&cli.config, &overrides)?;
            commands::price::run(&config, format)
        }
        Commands::Export { output, overrides } => {
            let config = config::load_config(&cli.config, &overrides)?;
            commands::export::run(&config, &output)
        }
        Commands::Check { overrides } => {
            let config = config::load_config(&cli.config, &overrides)?;
            commands::check::run(&config)
        }
    }
}
