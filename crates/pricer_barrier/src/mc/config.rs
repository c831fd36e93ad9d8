//! Simulation parameters for GBM path generation.
//!
//! This module provides [`SimulationParameters`] and its builder. All
//! invariants are checked by [`SimulationParameters::validate`], which the
//! simulator calls before drawing a single random number.

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::{ensure_finite, ensure_positive, PricingError, Result};

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum volatility accepted (500% per year).
pub const MAX_VOLATILITY: f64 = 5.0;

/// Maximum number of cells (`num_paths * (num_steps + 1)`) in a path matrix.
///
/// 50M cells is 400MB of `f64`.
pub const MAX_MATRIX_CELLS: usize = 50_000_000;

/// Parameters of a GBM path simulation.
///
/// The asset follows `dS = μ S dt + σ S dW` on the grid
/// `t_i = i · horizon / num_steps`, `i = 0..=num_steps`.
///
/// # Examples
///
/// ```rust
/// use pricer_barrier::mc::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .initial_price(65.0)
///     .drift(0.06)
///     .volatility(0.2)
///     .horizon(1.0)
///     .num_steps(252)
///     .num_paths(10_000)
///     .random_seed(42)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.num_steps, 252);
/// assert!((params.dt() - 1.0 / 252.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct SimulationParameters {
    /// Initial asset price (S₀).
    pub initial_price: f64,
    /// Drift (μ), annualised.
    pub drift: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Horizon (T) in years.
    pub horizon: f64,
    /// Number of time steps (N).
    pub num_steps: usize,
    /// Number of simulated paths.
    pub num_paths: usize,
    /// Seed for reproducible draws; `None` draws from entropy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub random_seed: Option<u64>,
}

impl SimulationParameters {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Time step `dt = horizon / num_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.num_steps as f64
    }

    /// Time grid `t_i = i · dt` for `i = 0..=num_steps`.
    ///
    /// The last point is set to `horizon` exactly.
    pub fn time_grid(&self) -> Vec<f64> {
        time_grid(self.horizon, self.num_steps)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if:
    /// - `initial_price` or `horizon` is not positive and finite
    /// - `drift` is not finite
    /// - `volatility` is negative, not finite or greater than [`MAX_VOLATILITY`]
    /// - `num_steps` is 0 or greater than [`MAX_STEPS`]
    /// - `num_paths` is 0 or greater than [`MAX_PATHS`]
    /// - the path matrix would exceed [`MAX_MATRIX_CELLS`]
    pub fn validate(&self) -> Result<()> {
        ensure_positive("initial_price", self.initial_price)?;
        ensure_finite("drift", self.drift)?;
        ensure_finite("volatility", self.volatility)?;
        if !(0.0..=MAX_VOLATILITY).contains(&self.volatility) {
            return Err(PricingError::invalid(
                "volatility",
                format!(
                    "must be in range [0, {}], got {}",
                    MAX_VOLATILITY, self.volatility
                ),
            ));
        }
        ensure_positive("horizon", self.horizon)?;

        if self.num_steps == 0 || self.num_steps > MAX_STEPS {
            return Err(PricingError::invalid(
                "num_steps",
                format!("must be in range [1, {}], got {}", MAX_STEPS, self.num_steps),
            ));
        }
        if self.num_paths == 0 || self.num_paths > MAX_PATHS {
            return Err(PricingError::invalid(
                "num_paths",
                format!("must be in range [1, {}], got {}", MAX_PATHS, self.num_paths),
            ));
        }

        let cells = self.num_paths.saturating_mul(self.num_steps + 1);
        if cells > MAX_MATRIX_CELLS {
            return Err(PricingError::invalid(
                "num_paths",
                format!(
                    "{} paths x {} columns = {} cells exceeds the limit of {}",
                    self.num_paths,
                    self.num_steps + 1,
                    cells,
                    MAX_MATRIX_CELLS
                ),
            ));
        }
        Ok(())
    }
}

pub(crate) fn time_grid(horizon: f64, num_steps: usize) -> Vec<f64> {
    let dt = horizon / num_steps as f64;
    let mut grid: Vec<f64> = (0..=num_steps).map(|i| i as f64 * dt).collect();
    if let Some(last) = grid.last_mut() {
        *last = horizon;
    }
    grid
}

/// Builder for [`SimulationParameters`].
///
/// Every field except `random_seed` must be set before [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    initial_price: Option<f64>,
    drift: Option<f64>,
    volatility: Option<f64>,
    horizon: Option<f64>,
    num_steps: Option<usize>,
    num_paths: Option<usize>,
    random_seed: Option<u64>,
}

impl SimulationParametersBuilder {
    /// Sets the initial asset price.
    #[inline]
    pub fn initial_price(mut self, initial_price: f64) -> Self {
        self.initial_price = Some(initial_price);
        self
    }

    /// Sets the drift.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the horizon in years.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the number of time steps.
    #[inline]
    pub fn num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = Some(num_steps);
        self
    }

    /// Sets the number of paths.
    #[inline]
    pub fn num_paths(mut self, num_paths: usize) -> Self {
        self.num_paths = Some(num_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if a required field is
    /// missing or any invariant is violated.
    pub fn build(self) -> Result<SimulationParameters> {
        let params = SimulationParameters {
            initial_price: required("initial_price", self.initial_price)?,
            drift: required("drift", self.drift)?,
            volatility: required("volatility", self.volatility)?,
            horizon: required("horizon", self.horizon)?,
            num_steps: required("num_steps", self.num_steps)?,
            num_paths: required("num_paths", self.num_paths)?,
            random_seed: self.random_seed,
        };

        params.validate()?;
        Ok(params)
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| PricingError::invalid(name, "must be specified"))
}
