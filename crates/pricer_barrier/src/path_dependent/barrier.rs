//! Barrier option contract and per-path payoff.
//!
//! Four barrier flavours come from two independent switches:
//!
//! - **Up**: breach when the path maximum reaches the barrier from below
//! - **Down**: breach when the path minimum reaches the barrier from above
//! - **Knock-in**: the vanilla payoff is paid only if the path breached
//! - **Knock-out**: the vanilla payoff is paid only if the path did not breach
//!
//! Reaching the barrier is inclusive: an extremum exactly equal to the
//! barrier level is a breach.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Deserialize;

use super::PathObserver;
use crate::error::{ensure_finite, ensure_positive, PricingError, Result};

/// Side from which the barrier is approached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(try_from = "String"))]
pub enum BarrierDirection {
    /// Breach when the price rises to or above the barrier (uses path maximum).
    Up,
    /// Breach when the price falls to or below the barrier (uses path minimum).
    Down,
}

/// Whether breaching activates or deactivates the payoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(try_from = "String"))]
pub enum KnockType {
    /// Pays only if the barrier was breached.
    KnockIn,
    /// Pays only if the barrier was never breached.
    KnockOut,
}

/// Vanilla payoff applied at maturity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(try_from = "String"))]
pub enum OptionKind {
    /// `max(0, S_T - K)`
    Call,
    /// `max(0, K - S_T)`
    Put,
}

impl BarrierDirection {
    /// Returns true for an up barrier.
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierDirection::Up)
    }
}

impl KnockType {
    /// Returns true for a knock-in barrier.
    #[inline]
    pub fn is_in(&self) -> bool {
        matches!(self, KnockType::KnockIn)
    }
}

impl FromStr for BarrierDirection {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(BarrierDirection::Up),
            "down" => Ok(BarrierDirection::Down),
            other => Err(PricingError::invalid(
                "barrier_direction",
                format!("unknown value '{}', expected one of: up, down", other),
            )),
        }
    }
}

impl FromStr for KnockType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "knock_in" | "in" => Ok(KnockType::KnockIn),
            "knock_out" | "out" => Ok(KnockType::KnockOut),
            other => Err(PricingError::invalid(
                "knock_type",
                format!("unknown value '{}', expected one of: knock_in, knock_out", other),
            )),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => Err(PricingError::invalid(
                "option_kind",
                format!("unknown value '{}', expected one of: call, put", other),
            )),
        }
    }
}

impl TryFrom<String> for BarrierDirection {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for KnockType {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for OptionKind {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for BarrierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierDirection::Up => write!(f, "up"),
            BarrierDirection::Down => write!(f, "down"),
        }
    }
}

impl fmt::Display for KnockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnockType::KnockIn => write!(f, "knock_in"),
            KnockType::KnockOut => write!(f, "knock_out"),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// Terms of a single-barrier European option.
///
/// The horizon is not stored here; it comes from the
/// [`PathMatrix`](crate::mc::PathMatrix) the contract is evaluated on.
///
/// # Examples
///
/// ```
/// use pricer_barrier::path_dependent::{OptionContractParameters, KnockType};
///
/// let contract = OptionContractParameters::up_out_call(78.0, 65.0, 0.06);
/// assert_eq!(contract.knock_type, KnockType::KnockOut);
/// assert!(contract.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct OptionContractParameters {
    /// Strike price (K).
    pub strike: f64,
    /// Barrier level (B).
    pub barrier_level: f64,
    /// Barrier direction.
    pub barrier_direction: BarrierDirection,
    /// Knock-in or knock-out.
    pub knock_type: KnockType,
    /// Call or put.
    pub option_kind: OptionKind,
    /// Continuously compounded risk-free rate (r).
    pub risk_free_rate: f64,
}

/// Evaluation of one path against a contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathOutcome {
    /// Path maximum for up barriers, minimum for down barriers.
    pub extremum: f64,
    /// Whether the extremum reached the barrier.
    pub breached: bool,
    /// Vanilla payoff at maturity, ignoring the barrier.
    pub vanilla: f64,
    /// Payoff after the knock condition.
    pub payoff: f64,
}

impl OptionContractParameters {
    /// Creates new contract parameters.
    #[inline]
    pub fn new(
        strike: f64,
        barrier_level: f64,
        barrier_direction: BarrierDirection,
        knock_type: KnockType,
        option_kind: OptionKind,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            strike,
            barrier_level,
            barrier_direction,
            knock_type,
            option_kind,
            risk_free_rate,
        }
    }

    /// Up-and-out call.
    #[inline]
    pub fn up_out_call(strike: f64, barrier: f64, rate: f64) -> Self {
        Self::new(
            strike,
            barrier,
            BarrierDirection::Up,
            KnockType::KnockOut,
            OptionKind::Call,
            rate,
        )
    }

    /// Up-and-in call.
    #[inline]
    pub fn up_in_call(strike: f64, barrier: f64, rate: f64) -> Self {
        Self::new(
            strike,
            barrier,
            BarrierDirection::Up,
            KnockType::KnockIn,
            OptionKind::Call,
            rate,
        )
    }

    /// Down-and-out put.
    #[inline]
    pub fn down_out_put(strike: f64, barrier: f64, rate: f64) -> Self {
        Self::new(
            strike,
            barrier,
            BarrierDirection::Down,
            KnockType::KnockOut,
            OptionKind::Put,
            rate,
        )
    }

    /// Down-and-in put.
    #[inline]
    pub fn down_in_put(strike: f64, barrier: f64, rate: f64) -> Self {
        Self::new(
            strike,
            barrier,
            BarrierDirection::Down,
            KnockType::KnockIn,
            OptionKind::Put,
            rate,
        )
    }

    /// Same contract with the opposite knock type.
    #[inline]
    pub fn with_knock_type(self, knock_type: KnockType) -> Self {
        Self { knock_type, ..self }
    }

    /// Validates the contract.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if `strike` or
    /// `barrier_level` is not positive and finite, or `risk_free_rate` is
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("strike", self.strike)?;
        ensure_positive("barrier_level", self.barrier_level)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        Ok(())
    }

    /// Picks the extremum relevant to the barrier direction.
    #[inline]
    pub fn extremum(&self, observer: &PathObserver) -> f64 {
        match self.barrier_direction {
            BarrierDirection::Up => observer.maximum(),
            BarrierDirection::Down => observer.minimum(),
        }
    }

    /// Inclusive breach test.
    #[inline]
    pub fn is_breached(&self, extremum: f64) -> bool {
        match self.barrier_direction {
            BarrierDirection::Up => extremum >= self.barrier_level,
            BarrierDirection::Down => extremum <= self.barrier_level,
        }
    }

    /// Vanilla payoff at maturity.
    #[inline]
    pub fn vanilla_payoff(&self, terminal: f64) -> f64 {
        match self.option_kind {
            OptionKind::Call => (terminal - self.strike).max(0.0),
            OptionKind::Put => (self.strike - terminal).max(0.0),
        }
    }

    /// Applies the knock condition to a vanilla payoff.
    #[inline]
    pub fn knocked_payoff(&self, breached: bool, vanilla: f64) -> f64 {
        if breached == self.knock_type.is_in() {
            vanilla
        } else {
            0.0
        }
    }

    /// Evaluates one path (all grid points, including t₀).
    #[inline]
    pub fn evaluate_path(&self, path: &[f64]) -> PathOutcome {
        let observer = PathObserver::from_path(path);
        let extremum = self.extremum(&observer);
        let breached = self.is_breached(extremum);
        let vanilla = self.vanilla_payoff(observer.terminal());

        PathOutcome {
            extremum,
            breached,
            vanilla,
            payoff: self.knocked_payoff(breached, vanilla),
        }
    }
}
