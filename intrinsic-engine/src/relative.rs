//! Relative valuation with an industry P/E multiple.

use crate::types::{RelativeInputs, RelativeResult};

/// `industry P/E * EPS`. Negative EPS passes straight through.
pub fn compute_relative(inputs: &RelativeInputs) -> RelativeResult {
    RelativeResult {
        intrinsic_value: inputs.industry_pe * inputs.eps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple() {
        let result = compute_relative(&RelativeInputs {
            industry_pe: 18.5,
            eps: 4.0,
        });
        assert_eq!(result.intrinsic_value, 74.0);
    }

    #[test]
    fn test_negative_eps_not_rejected() {
        let result = compute_relative(&RelativeInputs {
            industry_pe: 15.0,
            eps: -2.0,
        });
        assert_eq!(result.intrinsic_value, -30.0);
    }
}
