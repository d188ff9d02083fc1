//! Dividend Discount Model (Gordon growth).

use crate::error::{ValuationError, ValuationResult};
use crate::types::{DdmInputs, DdmResult};

/// `D1 / (r - g)`. Requires `r > g`.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn compute_ddm(inputs: &DdmInputs) -> ValuationResult<DdmResult> {
    if !(inputs.required_return > inputs.growth_rate) {
        return Err(ValuationError::InvalidRateRelation {
            greater: "Required return",
            greater_value: inputs.required_return.as_percent(),
            lesser: "dividend growth rate",
            lesser_value: inputs.growth_rate.as_percent(),
        });
    }

    let spread = (inputs.required_return - inputs.growth_rate).as_fraction();

    Ok(DdmResult {
        intrinsic_value: inputs.next_dividend / spread,
    })
}
