//! Barrier option pricing engine.
//!
//! This module provides the valuation step on top of the path simulator:
//!
//! 1. Per-path extremum, breach test and knocked payoff (in parallel)
//! 2. Mean payoff and its standard error, reduced in path order
//! 3. Discounting once at maturity with `exp(-r T)`
//!
//! [`BarrierPricingConfig`] ties simulation and contract together into the
//! single configuration structure used by callers that want one call from
//! parameters to premium.

use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::SimulationParameters;
use super::paths::{simulate_paths, PathMatrix};
use crate::error::{PricingError, Result};
use crate::path_dependent::{OptionContractParameters, PathOutcome};

/// Per-path vectors for external analysis or plotting.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PathDiagnostics {
    /// Knocked payoff of each path (undiscounted).
    pub payoffs: Vec<f64>,
    /// Maximum (up) or minimum (down) of each path.
    pub extrema: Vec<f64>,
    /// Breach flag of each path.
    pub breached: Vec<bool>,
}

/// Pricing result.
///
/// # Examples
///
/// ```rust
/// use pricer_barrier::mc::PricingResult;
///
/// let result = PricingResult {
///     premium: 1.25,
///     std_error: 0.01,
///     ..Default::default()
/// };
///
/// println!("Premium: {} +/- {}", result.premium, result.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PricingResult {
    /// Discounted expected payoff.
    pub premium: f64,
    /// Standard error of the premium estimate.
    pub std_error: f64,
    /// `exp(-r T)`.
    pub discount_factor: f64,
    /// Fraction of paths that reached the barrier.
    pub breach_probability: f64,
    /// Discounted expected vanilla payoff over the same paths.
    pub vanilla_premium: f64,
    /// Number of paths evaluated.
    pub n_paths: usize,
    /// Per-path vectors, when requested.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub diagnostics: Option<PathDiagnostics>,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Prices a barrier option on simulated or supplied paths.
///
/// The horizon used for discounting is the one carried by `paths`.
///
/// # Errors
///
/// - `DimensionMismatch` if `paths` has no rows or no columns
/// - `InvalidParameter` if the contract is invalid, or the discount factor
///   overflows
///
/// # Examples
///
/// ```rust
/// use pricer_barrier::mc::{price_barrier_option, PathMatrix};
/// use pricer_barrier::path_dependent::OptionContractParameters;
///
/// let paths = PathMatrix::from_rows(
///     vec![vec![100.0, 104.0, 112.0], vec![100.0, 115.0, 112.0]],
///     1.0,
/// )
/// .unwrap();
/// let contract = OptionContractParameters::up_out_call(100.0, 110.0, 0.0);
///
/// let result = price_barrier_option(&paths, &contract).unwrap();
/// // First path ends above the barrier at maturity, second breached early
/// assert_eq!(result.premium, 0.0);
/// assert_eq!(result.breach_probability, 1.0);
/// ```
pub fn price_barrier_option(
    paths: &PathMatrix,
    contract: &OptionContractParameters,
) -> Result<PricingResult> {
    evaluate(paths, contract, false)
}

/// Same as [`price_barrier_option`], also returning per-path payoffs and extrema.
///
/// # Errors
///
/// See [`price_barrier_option`].
pub fn price_barrier_option_with_diagnostics(
    paths: &PathMatrix,
    contract: &OptionContractParameters,
) -> Result<PricingResult> {
    evaluate(paths, contract, true)
}

fn evaluate(
    paths: &PathMatrix,
    contract: &OptionContractParameters,
    with_diagnostics: bool,
) -> Result<PricingResult> {
    if paths.n_paths() == 0 {
        return Err(PricingError::dimension("path matrix has no rows"));
    }
    if paths.n_columns() == 0 {
        return Err(PricingError::dimension("path matrix has no columns"));
    }
    contract.validate()?;

    let discount_factor = (-contract.risk_free_rate * paths.horizon()).exp();
    if !discount_factor.is_finite() {
        return Err(PricingError::invalid(
            "risk_free_rate",
            format!(
                "discount factor exp(-{} * {}) is not finite",
                contract.risk_free_rate,
                paths.horizon()
            ),
        ));
    }

    let outcomes: Vec<PathOutcome> = paths
        .as_slice()
        .par_chunks(paths.n_columns())
        .map(|row| contract.evaluate_path(row))
        .collect();

    // Sequential reduction keeps the sum independent of thread count
    let n = outcomes.len() as f64;
    let mut payoff_sum = 0.0;
    let mut payoff_sum_sq = 0.0;
    let mut vanilla_sum = 0.0;
    let mut breaches = 0usize;
    for outcome in &outcomes {
        payoff_sum += outcome.payoff;
        payoff_sum_sq += outcome.payoff * outcome.payoff;
        vanilla_sum += outcome.vanilla;
        breaches += usize::from(outcome.breached);
    }

    let mean = payoff_sum / n;
    let variance = (payoff_sum_sq / n - mean * mean).max(0.0);
    let std_error = variance.sqrt() / n.sqrt();

    let diagnostics = with_diagnostics.then(|| PathDiagnostics {
        payoffs: outcomes.iter().map(|o| o.payoff).collect(),
        extrema: outcomes.iter().map(|o| o.extremum).collect(),
        breached: outcomes.iter().map(|o| o.breached).collect(),
    });

    let result = PricingResult {
        premium: discount_factor * mean,
        std_error: discount_factor * std_error,
        discount_factor,
        breach_probability: breaches as f64 / n,
        vanilla_premium: discount_factor * (vanilla_sum / n),
        n_paths: outcomes.len(),
        diagnostics,
    };

    debug!(
        n_paths = result.n_paths,
        premium = result.premium,
        std_error = result.std_error,
        breach_probability = result.breach_probability,
        direction = %contract.barrier_direction,
        knock = %contract.knock_type,
        kind = %contract.option_kind,
        "priced barrier option"
    );

    Ok(result)
}

/// Complete pricing request: simulation plus contract.
///
/// # Examples
///
/// ```rust
/// use pricer_barrier::mc::{BarrierPricingConfig, SimulationParameters};
/// use pricer_barrier::path_dependent::OptionContractParameters;
///
/// let config = BarrierPricingConfig {
///     simulation: SimulationParameters::builder()
///         .initial_price(65.0)
///         .drift(0.06)
///         .volatility(0.2)
///         .horizon(1.0)
///         .num_steps(52)
///         .num_paths(2_000)
///         .random_seed(42)
///         .build()
///         .unwrap(),
///     contract: OptionContractParameters::up_out_call(78.0, 65.0, 0.06),
///     diagnostics: false,
/// };
///
/// let result = config.price().unwrap();
/// assert!(result.premium >= 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct BarrierPricingConfig {
    /// Path simulation parameters.
    pub simulation: SimulationParameters,
    /// Option contract terms.
    pub contract: OptionContractParameters,
    /// Attach per-path vectors to the result.
    #[cfg_attr(feature = "serde", serde(default))]
    pub diagnostics: bool,
}

impl BarrierPricingConfig {
    /// Validates simulation and contract parameters.
    ///
    /// # Errors
    ///
    /// Returns the first `InvalidParameter` found.
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.contract.validate()
    }

    /// Simulates paths and prices the contract on them.
    ///
    /// Everything is validated before the first random draw.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for any invalid field.
    pub fn price(&self) -> Result<PricingResult> {
        self.validate()?;
        let paths = self.simulate()?;
        if self.diagnostics {
            price_barrier_option_with_diagnostics(&paths, &self.contract)
        } else {
            price_barrier_option(&paths, &self.contract)
        }
    }

    /// Simulates the path matrix only.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the simulation parameters are invalid.
    pub fn simulate(&self) -> Result<PathMatrix> {
        simulate_paths(&self.simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_dependent::KnockType;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn matrix(rows: Vec<Vec<f64>>) -> PathMatrix {
        PathMatrix::from_rows(rows, 1.0).unwrap()
    }

    fn sim(volatility: f64, seed: u64, n_paths: usize) -> SimulationParameters {
        SimulationParameters {
            initial_price: 100.0,
            drift: 0.05,
            volatility,
            horizon: 1.0,
            num_steps: 50,
            num_paths: n_paths,
            random_seed: Some(seed),
        }
    }

    #[test]
    fn test_empty_matrix_is_dimension_mismatch() {
        let contract = OptionContractParameters::up_out_call(100.0, 110.0, 0.05);

        let no_rows = PathMatrix::from_rows(vec![], 1.0).unwrap();
        assert!(matches!(
            price_barrier_option(&no_rows, &contract),
            Err(PricingError::DimensionMismatch(_))
        ));

        let no_columns = PathMatrix::from_rows(vec![vec![]], 1.0).unwrap();
        assert!(matches!(
            price_barrier_option(&no_columns, &contract),
            Err(PricingError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_invalid_contract() {
        let paths = matrix(vec![vec![100.0, 101.0]]);
        let contract = OptionContractParameters::up_out_call(-5.0, 110.0, 0.05);
        assert!(matches!(
            price_barrier_option(&paths, &contract),
            Err(PricingError::InvalidParameter { name: "strike", .. })
        ));
    }

    #[test]
    fn test_discount_overflow_rejected() {
        let paths = matrix(vec![vec![100.0, 101.0]]);
        let contract = OptionContractParameters::up_out_call(90.0, 110.0, -1e308);
        assert!(matches!(
            price_barrier_option(&paths, &contract),
            Err(PricingError::InvalidParameter { name: "risk_free_rate", .. })
        ));
    }

    #[test]
    fn test_hand_computed_premium() {
        // Up-and-out call, K=100, B=120, r=5%, T=1
        let paths = matrix(vec![
            vec![100.0, 110.0, 115.0], // alive, pays 15
            vec![100.0, 125.0, 118.0], // knocked out
            vec![100.0, 95.0, 90.0],   // alive, out of the money
            vec![100.0, 104.0, 105.0], // alive, pays 5
        ]);
        let contract = OptionContractParameters::up_out_call(100.0, 120.0, 0.05);

        let result = price_barrier_option_with_diagnostics(&paths, &contract).unwrap();
        let df = (-0.05_f64).exp();

        assert_relative_eq!(result.discount_factor, df, epsilon = 1e-15);
        assert_relative_eq!(result.premium, df * 20.0 / 4.0, epsilon = 1e-12);
        assert_relative_eq!(result.vanilla_premium, df * 38.0 / 4.0, epsilon = 1e-12);
        assert_relative_eq!(result.breach_probability, 0.25);
        assert_eq!(result.n_paths, 4);

        let diag = result.diagnostics.unwrap();
        assert_eq!(diag.payoffs, vec![15.0, 0.0, 0.0, 5.0]);
        assert_eq!(diag.extrema, vec![115.0, 125.0, 100.0, 105.0]);
        assert_eq!(diag.breached, vec![false, true, false, false]);
    }

    #[test]
    fn test_std_error() {
        // Payoffs 0 and 10: mean 5, population std 5, se = 5 / sqrt(2)
        let paths = matrix(vec![vec![100.0, 90.0], vec![100.0, 110.0]]);
        let contract = OptionContractParameters::up_in_call(100.0, 100.0, 0.0);

        let result = price_barrier_option(&paths, &contract).unwrap();
        assert_relative_eq!(result.premium, 5.0, epsilon = 1e-12);
        assert_relative_eq!(result.std_error, 5.0 / 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(result.diagnostics.is_none());
    }

    #[test]
    fn test_barrier_inclusivity_exact_equality() {
        // Max of the path equals the barrier exactly
        let paths = matrix(vec![vec![100.0, 110.0, 105.0]]);

        let out = OptionContractParameters::up_out_call(100.0, 110.0, 0.0);
        let result = price_barrier_option(&paths, &out).unwrap();
        assert_eq!(result.premium, 0.0);
        assert_eq!(result.breach_probability, 1.0);

        let inn = out.with_knock_type(KnockType::KnockIn);
        let result = price_barrier_option(&paths, &inn).unwrap();
        assert_relative_eq!(result.premium, 5.0);
    }

    #[test]
    fn test_down_barrier_exact_equality() {
        let paths = matrix(vec![vec![100.0, 90.0, 95.0]]);
        let contract = OptionContractParameters::down_in_put(100.0, 90.0, 0.0);

        let result = price_barrier_option(&paths, &contract).unwrap();
        assert_relative_eq!(result.premium, 5.0);
    }

    #[test]
    fn test_in_out_parity_on_simulated_paths() {
        let paths = simulate_paths(&sim(0.25, 11, 5_000)).unwrap();
        let out = OptionContractParameters::up_out_call(100.0, 120.0, 0.05);
        let inn = out.with_knock_type(KnockType::KnockIn);

        let r_out = price_barrier_option_with_diagnostics(&paths, &out).unwrap();
        let r_in = price_barrier_option_with_diagnostics(&paths, &inn).unwrap();

        assert_relative_eq!(
            r_out.premium + r_in.premium,
            r_out.vanilla_premium,
            max_relative = 1e-12
        );
        assert_eq!(r_out.vanilla_premium, r_in.vanilla_premium);

        let out_payoffs = r_out.diagnostics.unwrap().payoffs;
        let in_payoffs = r_in.diagnostics.unwrap().payoffs;
        for (a, b) in out_payoffs.iter().zip(&in_payoffs) {
            assert!(*a == 0.0 || *b == 0.0);
        }
    }

    #[test]
    fn test_result_is_reproducible() {
        let contract = OptionContractParameters::down_out_put(100.0, 85.0, 0.05);
        let r1 = price_barrier_option(&simulate_paths(&sim(0.3, 5, 2_000)).unwrap(), &contract);
        let r2 = price_barrier_option(&simulate_paths(&sim(0.3, 5, 2_000)).unwrap(), &contract);
        assert_eq!(r1.unwrap(), r2.unwrap());
    }

    #[test]
    fn test_config_price_validates_contract_first() {
        let config = BarrierPricingConfig {
            simulation: sim(0.2, 1, 10),
            contract: OptionContractParameters::up_out_call(100.0, 0.0, 0.05),
            diagnostics: false,
        };
        assert!(matches!(
            config.price(),
            Err(PricingError::InvalidParameter { name: "barrier_level", .. })
        ));
    }

    #[test]
    fn test_config_diagnostics_flag() {
        let mut config = BarrierPricingConfig {
            simulation: sim(0.2, 1, 100),
            contract: OptionContractParameters::up_out_call(100.0, 130.0, 0.05),
            diagnostics: true,
        };
        let diag = config.price().unwrap().diagnostics.unwrap();
        assert_eq!(diag.payoffs.len(), 100);
        assert_eq!(diag.extrema.len(), 100);

        config.diagnostics = false;
        assert!(config.price().unwrap().diagnostics.is_none());
    }

    #[test]
    fn test_confidence_intervals() {
        let result = PricingResult {
            std_error: 0.5,
            ..Default::default()
        };
        assert_relative_eq!(result.confidence_95(), 0.98);
        assert_relative_eq!(result.confidence_99(), 1.288);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_premium_non_negative_and_parity(
            seed in any::<u64>(),
            vol in 0.0f64..0.8,
            strike in 50.0f64..150.0,
            barrier in 50.0f64..150.0,
            rate in -0.05f64..0.2,
            up in any::<bool>(),
            call in any::<bool>(),
        ) {
            use crate::path_dependent::{BarrierDirection, OptionKind};

            let paths = simulate_paths(&sim(vol, seed, 200)).unwrap();
            let direction = if up { BarrierDirection::Up } else { BarrierDirection::Down };
            let kind = if call { OptionKind::Call } else { OptionKind::Put };
            let out = OptionContractParameters::new(
                strike, barrier, direction, KnockType::KnockOut, kind, rate,
            );
            let inn = out.with_knock_type(KnockType::KnockIn);

            let r_out = price_barrier_option(&paths, &out).unwrap();
            let r_in = price_barrier_option(&paths, &inn).unwrap();

            prop_assert!(r_out.premium >= 0.0);
            prop_assert!(r_in.premium >= 0.0);
            prop_assert!(
                (r_out.premium + r_in.premium - r_out.vanilla_premium).abs()
                    <= 1e-9 * (1.0 + r_out.vanilla_premium)
            );
        }
    }
}
