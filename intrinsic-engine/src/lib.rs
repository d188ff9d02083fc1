//! Intrinsic Engine
//!
//! Intrinsic per-share valuation under five independent models:
//!
//! - **DCF**: ten-year two-phase free cash flow projection plus terminal value,
//!   with ±10% bounds and a margin-of-safety price
//! - **DDM**: Gordon growth dividend discount model
//! - **RIM**: residual income capitalised at a CAPM cost of equity
//! - **Relative**: industry P/E multiple times EPS
//! - **Asset-based**: net asset value per share
//!
//! Every evaluator is a pure function over a flat `Copy` input record. Rates are
//! whole-number percents wrapped in [`Rate`]. Results are raw `f64`; rounding is
//! left to whoever displays them.
//!
//! # Usage
//!
//! ```
//! use intrinsic_engine::{AssetInputs, ValuationEngine, ValuationRequest};
//!
//! let engine = ValuationEngine::new();
//! let outcome = engine
//!     .evaluate(&ValuationRequest::AssetBased(AssetInputs {
//!         total_assets: 100.0,
//!         total_liabilities: 40.0,
//!         shares_outstanding: 10.0,
//!     }))
//!     .unwrap();
//!
//! assert!((outcome.headline_value() - 6.0).abs() < 1e-12);
//! ```

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod asset;
pub mod dcf;
pub mod ddm;
pub mod engine;
pub mod error;
pub mod rate;
pub mod relative;
pub mod rim;
pub mod types;

pub use asset::compute_asset_based;
pub use dcf::compute_dcf;
pub use ddm::compute_ddm;
pub use engine::{ValuationEngine, ValuationOutcome, ValuationRequest};
pub use error::{ValuationError, ValuationErrorKind, ValuationResult};
pub use rate::Rate;
pub use relative::compute_relative;
pub use rim::compute_rim;
pub use types::{
    AssetInputs, AssetResult, DcfBreakdown, DcfInputs, DcfResult, DdmInputs, DdmResult,
    RelativeInputs, RelativeResult, RimInputs, RimResult, ValuationModel, PROJECTION_YEARS,
};
