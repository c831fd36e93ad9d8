//! Closed-form reference prices.
//!
//! These formulas assume continuous monitoring and serve as an independent
//! check on the Monte Carlo engine:
//! - Black-Scholes vanilla call and put
//! - Down-and-in call (strike at or above the barrier)
//! - Up-and-in put (strike at or below the barrier)
//! - Broadie-Glasserman barrier shift to compare against discrete monitoring

pub mod barrier;
pub mod black_scholes;
pub mod distributions;

pub use barrier::{discrete_barrier_shift, down_in_call, up_in_put, BROADIE_GLASSERMAN_BETA};
pub use black_scholes::black_scholes_price;
pub use distributions::norm_cdf;
