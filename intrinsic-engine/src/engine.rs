//! Valuation Engine.
//!
//! Dispatches a tagged [`ValuationRequest`] to the matching pure evaluator.

use serde::{Deserialize, Serialize};

use crate::asset::compute_asset_based;
use crate::dcf::compute_dcf;
use crate::ddm::compute_ddm;
use crate::error::ValuationResult;
use crate::relative::compute_relative;
use crate::rim::compute_rim;
use crate::types::*;

// ============================================================================
// Request / Outcome
// ============================================================================

/// One model selection together with exactly the inputs that model needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ValuationRequest {
    Dcf(DcfInputs),
    Ddm(DdmInputs),
    Rim(RimInputs),
    Relative(RelativeInputs),
    AssetBased(AssetInputs),
}

impl ValuationRequest {
    /// The model this request selects.
    pub const fn model(&self) -> ValuationModel {
        match self {
            Self::Dcf(_) => ValuationModel::Dcf,
            Self::Ddm(_) => ValuationModel::Ddm,
            Self::Rim(_) => ValuationModel::Rim,
            Self::Relative(_) => ValuationModel::Relative,
            Self::AssetBased(_) => ValuationModel::AssetBased,
        }
    }
}

/// Successful result of a [`ValuationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ValuationOutcome {
    Dcf(DcfResult),
    Ddm(DdmResult),
    Rim(RimResult),
    Relative(RelativeResult),
    AssetBased(AssetResult),
}

impl ValuationOutcome {
    /// The model that produced this outcome.
    pub const fn model(&self) -> ValuationModel {
        match self {
            Self::Dcf(_) => ValuationModel::Dcf,
            Self::Ddm(_) => ValuationModel::Ddm,
            Self::Rim(_) => ValuationModel::Rim,
            Self::Relative(_) => ValuationModel::Relative,
            Self::AssetBased(_) => ValuationModel::AssetBased,
        }
    }

    /// Primary per-share value of the outcome.
    pub fn headline_value(&self) -> f64 {
        match self {
            Self::Dcf(r) => r.intrinsic_price,
            Self::Ddm(r) => r.intrinsic_value,
            Self::Rim(r) => r.intrinsic_value,
            Self::Relative(r) => r.intrinsic_value,
            Self::AssetBased(r) => r.nav_per_share,
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Stateless front door over the five evaluators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEngine;

impl ValuationEngine {
    /// Create a new valuation engine.
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate whichever model the request selects.
    pub fn evaluate(&self, request: &ValuationRequest) -> ValuationResult<ValuationOutcome> {
        let model = request.model();
        tracing::debug!(model = model.short_name(), "Evaluating valuation model");

        let outcome = match request {
            ValuationRequest::Dcf(inputs) => self.dcf(inputs).map(ValuationOutcome::Dcf),
            ValuationRequest::Ddm(inputs) => self.ddm(inputs).map(ValuationOutcome::Ddm),
            ValuationRequest::Rim(inputs) => self.rim(inputs).map(ValuationOutcome::Rim),
            ValuationRequest::Relative(inputs) => {
                Ok(ValuationOutcome::Relative(self.relative(inputs)))
            }
            ValuationRequest::AssetBased(inputs) => {
                self.asset_based(inputs).map(ValuationOutcome::AssetBased)
            }
        };

        match &outcome {
            Ok(result) => tracing::debug!(
                model = model.short_name(),
                value = result.headline_value(),
                "Valuation complete"
            ),
            Err(e) => tracing::debug!(
                model = model.short_name(),
                kind = %e.kind(),
                error = %e,
                "Valuation rejected"
            ),
        }

        outcome
    }

    /// Discounted Cash Flow.
    pub fn dcf(&self, inputs: &DcfInputs) -> ValuationResult<DcfResult> {
        compute_dcf(inputs)
    }

    /// Dividend Discount Model.
    pub fn ddm(&self, inputs: &DdmInputs) -> ValuationResult<DdmResult> {
        compute_ddm(inputs)
    }

    /// Residual Income Model.
    pub fn rim(&self, inputs: &RimInputs) -> ValuationResult<RimResult> {
        compute_rim(inputs)
    }

    /// Relative P/E valuation.
    pub fn relative(&self, inputs: &RelativeInputs) -> RelativeResult {
        compute_relative(inputs)
    }

    /// Asset-based NAV per share.
    pub fn asset_based(&self, inputs: &AssetInputs) -> ValuationResult<AssetResult> {
        compute_asset_based(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValuationErrorKind;
    use crate::rate::Rate;

    #[test]
    fn test_dispatch_matches_model() {
        let engine = ValuationEngine::new();
        let requests = [
            ValuationRequest::Ddm(DdmInputs {
                next_dividend: 2.0,
                growth_rate: Rate::from_percent(8.0),
                required_return: Rate::from_percent(12.0),
            }),
            ValuationRequest::Relative(RelativeInputs {
                industry_pe: 10.0,
                eps: 3.0,
            }),
            ValuationRequest::AssetBased(AssetInputs {
                total_assets: 100.0,
                total_liabilities: 40.0,
                shares_outstanding: 10.0,
            }),
        ];

        for request in &requests {
            let outcome = engine.evaluate(request).unwrap();
            assert_eq!(outcome.model(), request.model());
        }
    }

    #[test]
    fn test_headline_value() {
        let engine = ValuationEngine::new();
        let outcome = engine
            .evaluate(&ValuationRequest::Relative(RelativeInputs {
                industry_pe: 12.0,
                eps: 2.5,
            }))
            .unwrap();
        assert_eq!(outcome.headline_value(), 30.0);
    }

    #[test]
    fn test_errors_propagate() {
        let engine = ValuationEngine::new();
        let err = engine
            .evaluate(&ValuationRequest::AssetBased(AssetInputs {
                total_assets: 1.0,
                total_liabilities: 0.0,
                shares_outstanding: -1.0,
            }))
            .unwrap_err();
        assert_eq!(err.kind(), ValuationErrorKind::InvalidShares);
    }

    #[test]
    fn test_request_json_shape() {
        let json = r#"{"model":"ddm","next_dividend":2.0,"growth_rate":8.0,"required_return":12.0}"#;
        let request: ValuationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.model(), ValuationModel::Ddm);

        let outcome = ValuationEngine::new().evaluate(&request).unwrap();
        let value = serde_json::to_value(outcome).unwrap();
        assert_eq!(value["model"], "ddm");
        assert!((value["intrinsic_value"].as_f64().unwrap() - 50.0).abs() < 1e-9);

        let back: ValuationOutcome = serde_json::from_value(value).unwrap();
        assert_eq!(back, outcome);
    }
}
