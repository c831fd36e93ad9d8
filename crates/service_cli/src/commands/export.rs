//! Export command implementation
//!
//! Writes one CSV row per simulated path so an external plotting layer can
//! chart extrema, breaches and payoffs.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pricer_barrier::mc::PathDiagnostics;
use pricer_barrier::{price_barrier_option_with_diagnostics, BarrierPricingConfig};
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct PathRecord {
    path: usize,
    extremum: f64,
    breached: bool,
    payoff: f64,
}

/// Run the export command
pub fn run(config: &BarrierPricingConfig, output: &Path) -> Result<()> {
    info!("Exporting per-path results to {}", output.display());

    let paths = config.simulate()?;
    let result = price_barrier_option_with_diagnostics(&paths, &config.contract)?;
    let diagnostics = result.diagnostics.as_ref().ok_or_else(|| {
        CliError::InvalidArgument("pricing returned no per-path diagnostics".to_string())
    })?;

    let written = write_paths(File::create(output)?, diagnostics)?;

    info!(
        rows = written,
        premium = result.premium,
        "Export complete"
    );
    Ok(())
}

/// Writes `path,extremum,breached,payoff` rows and returns the row count.
pub fn write_paths<W: Write>(writer: W, diagnostics: &PathDiagnostics) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);

    let rows = diagnostics
        .extrema
        .iter()
        .zip(&diagnostics.breached)
        .zip(&diagnostics.payoffs)
        .enumerate();

    let mut written = 0;
    for (path, ((&extremum, &breached), &payoff)) in rows {
        csv.serialize(PathRecord {
            path,
            extremum,
            breached,
            payoff,
        })?;
        written += 1;
    }

    csv.flush()?;
    Ok(written)
}
