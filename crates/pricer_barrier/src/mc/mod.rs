//! Monte Carlo simulation and valuation.
//!
//! # Architecture
//!
//! ```text
//! BarrierPricingConfig
//! ├── SimulationParameters  (validated inputs)
//! ├── simulate_paths()      → PathMatrix
//! └── price_barrier_option()
//!     ├── per-path extremum, breach, knocked payoff
//!     └── mean, standard error, discounting
//! ```
//!
//! Data flows one way: parameters → paths → premium.
//!
//! # Examples
//!
//! ```rust
//! use pricer_barrier::mc::{price_barrier_option, simulate_paths, SimulationParameters};
//! use pricer_barrier::path_dependent::OptionContractParameters;
//!
//! let params = SimulationParameters::builder()
//!     .initial_price(65.0)
//!     .drift(0.06)
//!     .volatility(0.2)
//!     .horizon(1.0)
//!     .num_steps(252)
//!     .num_paths(5_000)
//!     .random_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let paths = simulate_paths(&params).unwrap();
//! let contract = OptionContractParameters::up_in_call(78.0, 70.0, 0.06);
//!
//! let result = price_barrier_option(&paths, &contract).unwrap();
//! println!("Premium: {:.4} +/- {:.4}", result.premium, result.confidence_95());
//! ```

pub mod config;
pub mod paths;
pub mod pricer;

pub use config::{
    SimulationParameters, SimulationParametersBuilder, MAX_MATRIX_CELLS, MAX_PATHS, MAX_STEPS,
    MAX_VOLATILITY,
};
pub use paths::{simulate_paths, simulate_paths_with_rng, PathMatrix};
pub use pricer::{
    price_barrier_option, price_barrier_option_with_diagnostics, BarrierPricingConfig,
    PathDiagnostics, PricingResult,
};
