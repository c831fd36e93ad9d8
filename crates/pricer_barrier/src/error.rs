//! Error types for the barrier pricing engine.
//!
//! Both the path simulator and the payoff evaluator fail fast: every
//! error is raised before any random draw or computation takes place, so
//! no partial state is ever produced.

use thiserror::Error;

/// Errors raised by simulation and evaluation.
///
/// # Variants
/// - `InvalidParameter`: a simulation or contract field violates its invariant
/// - `DimensionMismatch`: a path matrix does not match the shape contract
///
/// # Examples
/// ```
/// use pricer_barrier::PricingError;
///
/// let err = PricingError::invalid("volatility", "must be non-negative, got -0.2");
/// assert_eq!(
///     err.to_string(),
///     "Invalid parameter 'volatility': must be non-negative, got -0.2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A parameter violates its invariant.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Constraint that was violated, including the offending value.
        reason: String,
    },

    /// The path matrix does not have the expected shape.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Creates a `DimensionMismatch` error.
    pub fn dimension(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Rejects values that are NaN or infinite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(name, format!("must be finite, got {}", value)))
    }
}

/// Rejects values that are not strictly positive and finite.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(name, format!("must be positive, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PricingError::invalid("num_paths", "must be at least 1, got 0");
        assert!(err.to_string().contains("num_paths"));
        assert!(err.to_string().contains("at least 1"));

        let err = PricingError::dimension("path matrix has no rows");
        assert_eq!(err.to_string(), "Dimension mismatch: path matrix has no rows");
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("strike", 78.0).is_ok());
        assert!(matches!(
            ensure_positive("strike", 0.0),
            Err(PricingError::InvalidParameter { name: "strike", .. })
        ));
        assert!(ensure_positive("strike", -1.0).is_err());
        assert!(ensure_positive("strike", f64::NAN).is_err());
        assert!(ensure_positive("strike", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite_accepts_negative() {
        assert!(ensure_finite("drift", -0.3).is_ok());
        assert!(ensure_finite("drift", f64::NEG_INFINITY).is_err());
    }
}
