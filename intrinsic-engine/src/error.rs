//! Validation failures returned by the evaluators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for valuation operations.
pub type ValuationResult<T> = std::result::Result<T, ValuationError>;

/// Coarse classification of a [`ValuationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationErrorKind {
    /// Share count is zero, negative or not a number
    InvalidShares,
    /// A rate that defines a denominator is not above the rate it must exceed
    InvalidRateRelation,
    /// A derived denominator came out as zero
    DivisionByZero,
}

impl std::fmt::Display for ValuationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShares => write!(f, "InvalidShares"),
            Self::InvalidRateRelation => write!(f, "InvalidRateRelation"),
            Self::DivisionByZero => write!(f, "DivisionByZero"),
        }
    }
}

/// Input rejected before any arithmetic was attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("{field} must be greater than 0 (got {value})")]
    InvalidShares { field: &'static str, value: f64 },

    #[error("{greater} must be greater than {lesser} (got {greater_value}% vs {lesser_value}%)")]
    InvalidRateRelation {
        greater: &'static str,
        greater_value: f64,
        lesser: &'static str,
        lesser_value: f64,
    },

    #[error("{quantity} is zero; {context} would divide by zero")]
    DivisionByZero {
        quantity: &'static str,
        context: &'static str,
    },
}

impl ValuationError {
    /// Classification of this error.
    pub const fn kind(&self) -> ValuationErrorKind {
        match self {
            Self::InvalidShares { .. } => ValuationErrorKind::InvalidShares,
            Self::InvalidRateRelation { .. } => ValuationErrorKind::InvalidRateRelation,
            Self::DivisionByZero { .. } => ValuationErrorKind::DivisionByZero,
        }
    }
}

/// Reject share counts that are not strictly positive. NaN is rejected too.
pub(crate) fn ensure_positive_shares(field: &'static str, value: f64) -> ValuationResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValuationError::InvalidShares { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let shares = ValuationError::InvalidShares {
            field: "Outstanding shares",
            value: 0.0,
        };
        assert_eq!(shares.kind(), ValuationErrorKind::InvalidShares);

        let rates = ValuationError::InvalidRateRelation {
            greater: "Discount rate",
            greater_value: 3.0,
            lesser: "terminal growth rate",
            lesser_value: 3.0,
        };
        assert_eq!(rates.kind(), ValuationErrorKind::InvalidRateRelation);

        let zero = ValuationError::DivisionByZero {
            quantity: "Cost of equity",
            context: "capitalising residual income",
        };
        assert_eq!(zero.kind(), ValuationErrorKind::DivisionByZero);
    }

    #[test]
    fn test_error_messages() {
        let err = ValuationError::InvalidShares {
            field: "Outstanding shares",
            value: -5.0,
        };
        assert_eq!(err.to_string(), "Outstanding shares must be greater than 0 (got -5)");

        let err = ValuationError::InvalidRateRelation {
            greater: "Required return",
            greater_value: 8.0,
            lesser: "dividend growth rate",
            lesser_value: 9.5,
        };
        assert_eq!(
            err.to_string(),
            "Required return must be greater than dividend growth rate (got 8% vs 9.5%)"
        );
    }

    #[test]
    fn test_ensure_positive_shares() {
        assert!(ensure_positive_shares("Shares", 1.0).is_ok());
        assert!(ensure_positive_shares("Shares", 0.0).is_err());
        assert!(ensure_positive_shares("Shares", -1.0).is_err());
        assert!(ensure_positive_shares("Shares", f64::NAN).is_err());
    }
}
