//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the path simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a seeded generator yields the same stream on every run
//! - **Isolation**: each pricing call owns its own generator instance; there is
//!   no implicit global generator state shared between calls
//! - **Efficiency**: batch operations write into caller-owned `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_barrier::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
