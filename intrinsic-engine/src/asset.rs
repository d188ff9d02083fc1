//! Asset-based (net asset value) valuation.

use crate::error::{ensure_positive_shares, ValuationResult};
use crate::types::{AssetInputs, AssetResult};

/// `(assets - liabilities) / shares`. Requires `shares > 0`.
pub fn compute_asset_based(inputs: &AssetInputs) -> ValuationResult<AssetResult> {
    ensure_positive_shares("Shares outstanding", inputs.shares_outstanding)?;

    Ok(AssetResult {
        nav_per_share: (inputs.total_assets - inputs.total_liabilities) / inputs.shares_outstanding,
    })
}
