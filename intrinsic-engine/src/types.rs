//! Valuation input and result records.
//!
//! Every record is a flat, immutable value built fresh for one evaluation.
//! Each model's inputs and outputs are disjoint.

use serde::{Deserialize, Serialize};

use crate::rate::Rate;

/// Length of the explicit DCF forecast horizon, in years.
pub const PROJECTION_YEARS: usize = 10;

// ============================================================================
// Model Catalogue
// ============================================================================

/// The five supported valuation models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationModel {
    /// Discounted Cash Flow
    Dcf,
    /// Dividend Discount Model (Gordon growth)
    Ddm,
    /// Residual Income Model
    Rim,
    /// Relative valuation with a P/E multiple
    Relative,
    /// Asset-based net asset value
    AssetBased,
}

impl ValuationModel {
    /// All models, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Dcf,
        Self::Ddm,
        Self::Rim,
        Self::Relative,
        Self::AssetBased,
    ];

    /// Human-readable model name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dcf => "Discounted Cash Flow (DCF)",
            Self::Ddm => "Dividend Discount Model (DDM)",
            Self::Rim => "Residual Income Model (RIM)",
            Self::Relative => "Relative Valuation (P/E Multiple)",
            Self::AssetBased => "Asset-Based Valuation",
        }
    }

    /// Short identifier, also accepted by `FromStr`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Dcf => "dcf",
            Self::Ddm => "ddm",
            Self::Rim => "rim",
            Self::Relative => "relative",
            Self::AssetBased => "asset",
        }
    }

    /// When the model is a good fit.
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Dcf => {
                "Ideal for companies with predictable and positive cash flows. \
                 Forecasts future free cash flows and discounts them to present value."
            }
            Self::Ddm => {
                "Best for stable, dividend-paying companies. Values a stock on the \
                 present value of expected future dividends."
            }
            Self::Rim => {
                "Suitable for firms not paying dividends. Values the excess return \
                 over the cost of equity."
            }
            Self::Relative => {
                "Quick comparison against industry peers using the price-to-earnings ratio."
            }
            Self::AssetBased => {
                "For asset-heavy companies or liquidation scenarios. Based on the \
                 difference between assets and liabilities."
            }
        }
    }
}

impl std::fmt::Display for ValuationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ValuationModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dcf" | "discounted_cash_flow" => Ok(Self::Dcf),
            "ddm" | "dividend_discount" => Ok(Self::Ddm),
            "rim" | "residual_income" => Ok(Self::Rim),
            "relative" | "pe" => Ok(Self::Relative),
            "asset" | "asset_based" | "nav" => Ok(Self::AssetBased),
            other => Err(format!("unknown valuation model: {other}")),
        }
    }
}

// ============================================================================
// DCF Types
// ============================================================================

/// Inputs for the Discounted Cash Flow model.
///
/// Cash figures may take any sign. Rates are whole-number percents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfInputs {
    /// Operating cash flow, present year
    pub operating_cash: f64,
    /// Operating cash flow, last year
    pub operating_cash_prior: f64,
    /// Operating cash flow, year before last
    pub operating_cash_two_prior: f64,
    /// Capital expenditure, present year
    pub capex: f64,
    /// Capital expenditure, last year
    pub capex_prior: f64,
    /// Capital expenditure, year before last
    pub capex_two_prior: f64,
    /// Growth rate applied in projection years 1-5
    pub near_term_growth: Rate,
    /// Growth rate applied in projection years 6-10
    pub long_term_growth: Rate,
    /// Perpetual growth after the forecast horizon
    pub terminal_growth: Rate,
    /// Discount rate
    pub discount_rate: Rate,
    /// Total debt, current year
    pub total_debt: f64,
    /// Cash and cash equivalents
    pub cash_equivalents: f64,
    /// Outstanding shares (must be > 0)
    pub outstanding_shares: f64,
}

impl DcfInputs {
    /// Free cash flow (operating cash minus capex) for present, prior and two-prior years.
    pub fn free_cash_flows(&self) -> [f64; 3] {
        [
            self.operating_cash - self.capex,
            self.operating_cash_prior - self.capex_prior,
            self.operating_cash_two_prior - self.capex_two_prior,
        ]
    }

    /// Total debt minus cash. Negative for a net cash position.
    pub fn net_debt(&self) -> f64 {
        self.total_debt - self.cash_equivalents
    }
}

/// Intermediate DCF figures, kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfBreakdown {
    /// Mean of the three historical free cash flows; projection base
    pub average_free_cash_flow: f64,
    /// Projected (undiscounted) free cash flows for years 1-10
    pub projected_cash_flows: [f64; PROJECTION_YEARS],
    /// Present values of the projected cash flows
    pub discounted_cash_flows: [f64; PROJECTION_YEARS],
    /// Growing-perpetuity value at the end of year 10
    pub terminal_value: f64,
    /// Terminal value discounted back 10 periods
    pub discounted_terminal_value: f64,
    /// Sum of discounted cash flows plus discounted terminal value
    pub enterprise_value: f64,
    /// Total debt minus cash equivalents
    pub net_debt: f64,
    /// Enterprise value minus net debt
    pub equity_value: f64,
}

/// DCF valuation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfResult {
    /// Intrinsic value per share
    pub intrinsic_price: f64,
    /// Intrinsic price plus 10%
    pub upper_bound: f64,
    /// Intrinsic price minus 10%
    pub lower_bound: f64,
    /// Lower bound less a 30% safety discount
    pub margin_of_safety_price: f64,
    /// Intermediate figures
    pub breakdown: DcfBreakdown,
}

// ============================================================================
// DDM Types
// ============================================================================

/// Inputs for the Gordon growth dividend discount model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DdmInputs {
    /// Expected dividend next year
    pub next_dividend: f64,
    /// Perpetual dividend growth rate
    pub growth_rate: Rate,
    /// Required rate of return
    pub required_return: Rate,
}

/// DDM valuation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DdmResult {
    pub intrinsic_value: f64,
}

// ============================================================================
// RIM Types
// ============================================================================

/// Inputs for the residual income model. Cost of equity comes from CAPM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimInputs {
    /// Book value per share
    pub book_value: f64,
    /// Net income per share
    pub net_income: f64,
    /// Risk-free rate
    pub risk_free_rate: Rate,
    /// Volatility relative to the market
    pub beta: f64,
    /// Expected market return
    pub market_return: Rate,
}

/// RIM valuation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimResult {
    /// CAPM cost of equity
    pub cost_of_equity: Rate,
    /// Book value times cost of equity
    pub equity_charge: f64,
    /// Net income minus equity charge
    pub residual_income: f64,
    pub intrinsic_value: f64,
}

// ============================================================================
// Relative Valuation Types
// ============================================================================

/// Inputs for P/E multiple valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeInputs {
    /// Industry price-to-earnings ratio
    pub industry_pe: f64,
    /// Company earnings per share
    pub eps: f64,
}

/// Relative valuation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeResult {
    pub intrinsic_value: f64,
}

// ============================================================================
// Asset-Based Types
// ============================================================================

/// Inputs for net asset value per share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetInputs {
    pub total_assets: f64,
    pub total_liabilities: f64,
    /// Shares outstanding (must be > 0)
    pub shares_outstanding: f64,
}

/// Asset-based valuation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetResult {
    /// Net asset value per share
    pub nav_per_share: f64,
}
