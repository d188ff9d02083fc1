//! Discounted Cash Flow valuation.
//!
//! Ten-year projection in two growth phases followed by a growing-perpetuity
//! terminal value:
//!
//! ```text
//!  base = mean(OCF - capex) over three years
//!
//!  year:  1 .. 5                 6 .. 10                 10 → ∞
//!        ┌───────────────────┐ ┌───────────────────────┐ ┌──────────────────────┐
//!        │ base·(1+g₁)^i     │ │ base·(1+g₁)^5·(1+g₂)^k│ │ FCF₁₀·(1+gₜ)/(r-gₜ)  │
//!        └───────────────────┘ └───────────────────────┘ └──────────────────────┘
//!              each year discounted by (1+r)^year, terminal value by (1+r)^10
//! ```
//!
//! `i` and `k` count from zero, so the first projected year is the base itself.

use crate::error::{ensure_positive_shares, ValuationError, ValuationResult};
use crate::types::{DcfBreakdown, DcfInputs, DcfResult, PROJECTION_YEARS};

/// Number of projection years that grow at the near-term rate.
pub const NEAR_TERM_YEARS: usize = 5;

/// Upper sensitivity band applied to the intrinsic price.
pub const UPPER_BOUND_FACTOR: f64 = 1.10;

/// Lower sensitivity band applied to the intrinsic price.
pub const LOWER_BOUND_FACTOR: f64 = 0.90;

/// Safety discount applied to the lower bound.
pub const MARGIN_OF_SAFETY_FACTOR: f64 = 0.70;

/// Value a company's shares from its historical free cash flow.
///
/// Fails with `InvalidShares` when `outstanding_shares <= 0` and with
/// `InvalidRateRelation` when the discount rate does not exceed the terminal
/// growth rate. A discount rate at or below -100% leaves no positive discount
/// factor and fails with `DivisionByZero`. Nothing is computed once a check
/// fails.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn compute_dcf(inputs: &DcfInputs) -> ValuationResult<DcfResult> {
    ensure_positive_shares("Outstanding shares", inputs.outstanding_shares)?;

    if !(inputs.discount_rate > inputs.terminal_growth) {
        return Err(ValuationError::InvalidRateRelation {
            greater: "Discount rate",
            greater_value: inputs.discount_rate.as_percent(),
            lesser: "terminal growth rate",
            lesser_value: inputs.terminal_growth.as_percent(),
        });
    }

    let discount = inputs.discount_rate.growth_factor();
    if !(discount > 0.0) {
        return Err(ValuationError::DivisionByZero {
            quantity: "Discount factor",
            context: "discounting projected cash flows",
        });
    }

    let fcf = inputs.free_cash_flows();
    let average_free_cash_flow = fcf.iter().sum::<f64>() / fcf.len() as f64;

    let projected_cash_flows = project_cash_flows(average_free_cash_flow, inputs);

    let mut discounted_cash_flows = [0.0; PROJECTION_YEARS];
    for (year, (pv, fv)) in discounted_cash_flows
        .iter_mut()
        .zip(projected_cash_flows.iter())
        .enumerate()
    {
        *pv = fv / discount.powi(year as i32 + 1);
    }

    let final_cash_flow = projected_cash_flows[PROJECTION_YEARS - 1];
    let terminal = inputs.terminal_growth;
    let terminal_value = final_cash_flow * terminal.growth_factor()
        / (inputs.discount_rate - terminal).as_fraction();
    let discounted_terminal_value = terminal_value / discount.powi(PROJECTION_YEARS as i32);

    let enterprise_value = discounted_cash_flows.iter().sum::<f64>() + discounted_terminal_value;
    let net_debt = inputs.net_debt();
    let equity_value = enterprise_value - net_debt;

    let intrinsic_price = equity_value / inputs.outstanding_shares;
    let upper_bound = intrinsic_price * UPPER_BOUND_FACTOR;
    let lower_bound = intrinsic_price * LOWER_BOUND_FACTOR;
    let margin_of_safety_price = lower_bound * MARGIN_OF_SAFETY_FACTOR;

    Ok(DcfResult {
        intrinsic_price,
        upper_bound,
        lower_bound,
        margin_of_safety_price,
        breakdown: DcfBreakdown {
            average_free_cash_flow,
            projected_cash_flows,
            discounted_cash_flows,
            terminal_value,
            discounted_terminal_value,
            enterprise_value,
            net_debt,
            equity_value,
        },
    })
}

/// Two-phase growth schedule from the averaged base cash flow.
fn project_cash_flows(base: f64, inputs: &DcfInputs) -> [f64; PROJECTION_YEARS] {
    let near = inputs.near_term_growth.growth_factor();
    let long = inputs.long_term_growth.growth_factor();
    let near_term_peak = base * near.powi(NEAR_TERM_YEARS as i32);

    let mut flows = [0.0; PROJECTION_YEARS];
    for (i, flow) in flows.iter_mut().enumerate() {
        *flow = if i < NEAR_TERM_YEARS {
            base * near.powi(i as i32)
        } else {
            near_term_peak * long.powi((i - NEAR_TERM_YEARS) as i32)
        };
    }
    flows
}
