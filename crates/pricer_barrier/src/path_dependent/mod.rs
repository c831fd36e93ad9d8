//! Path-dependent payoffs.
//!
//! - [`observer`]: single-pass max / min / terminal accumulation
//! - [`barrier`]: barrier contract terms, breach test and knocked payoff

pub mod barrier;
pub mod observer;

pub use barrier::{BarrierDirection, KnockType, OptionContractParameters, OptionKind, PathOutcome};
pub use observer::PathObserver;
