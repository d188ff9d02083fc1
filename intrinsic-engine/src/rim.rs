//! Residual Income Model with a CAPM cost of equity.

use crate::error::{ValuationError, ValuationResult};
use crate::rate::Rate;
use crate::types::{RimInputs, RimResult};

/// Cost of equity (as a fraction) below which it is treated as zero.
pub const COST_OF_EQUITY_EPSILON: f64 = 1e-12;

/// Book value plus residual income capitalised at the cost of equity.
///
/// Fails with `DivisionByZero` when CAPM yields a zero cost of equity, e.g.
/// `beta = 1` with a zero market return, or a NaN rate or beta.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn compute_rim(inputs: &RimInputs) -> ValuationResult<RimResult> {
    let cost_of_equity = Rate::capm(inputs.risk_free_rate, inputs.beta, inputs.market_return);
    let coe = cost_of_equity.as_fraction();

    if !(coe.abs() >= COST_OF_EQUITY_EPSILON) {
        return Err(ValuationError::DivisionByZero {
            quantity: "Cost of equity",
            context: "capitalising residual income",
        });
    }

    let equity_charge = inputs.book_value * coe;
    let residual_income = inputs.net_income - equity_charge;
    let intrinsic_value = inputs.book_value + residual_income / coe;

    Ok(RimResult {
        cost_of_equity,
        equity_charge,
        residual_income,
        intrinsic_value,
    })
}
