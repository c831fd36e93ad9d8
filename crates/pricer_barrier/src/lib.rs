//! # Pricer Barrier
//!
//! Monte Carlo pricing of single-barrier European options under Geometric
//! Brownian Motion.
//!
//! ## Pipeline
//!
//! - [`mc::simulate_paths`]: validated parameters → matrix of GBM paths
//! - [`mc::price_barrier_option`]: paths + contract → discounted premium
//!
//! Both steps are pure functions of their inputs (and the seed, when one is
//! set). All validation happens before any random draw.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_barrier::mc::{BarrierPricingConfig, SimulationParameters};
//! use pricer_barrier::path_dependent::OptionContractParameters;
//!
//! let config = BarrierPricingConfig {
//!     simulation: SimulationParameters::builder()
//!         .initial_price(65.0)
//!         .drift(0.06)
//!         .volatility(0.2)
//!         .horizon(1.0)
//!         .num_steps(252)
//!         .num_paths(10_000)
//!         .random_seed(42)
//!         .build()
//!         .unwrap(),
//!     contract: OptionContractParameters::up_out_call(78.0, 65.0, 0.06),
//!     diagnostics: false,
//! };
//!
//! let result = config.price().unwrap();
//! // S0 already sits on the up barrier, every path is knocked out
//! assert_eq!(result.premium, 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Deserialize` for configuration types, `Serialize` for results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod error;
pub mod mc;
pub mod path_dependent;
pub mod rng;

// Re-export commonly used items for convenience
pub use error::{PricingError, Result};
pub use mc::{
    price_barrier_option, price_barrier_option_with_diagnostics, simulate_paths,
    BarrierPricingConfig, PathMatrix, PricingResult, SimulationParameters,
};
pub use path_dependent::{BarrierDirection, KnockType, OptionContractParameters, OptionKind};
