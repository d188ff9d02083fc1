//! Command-line arguments.
//!
//! Each model subcommand collects exactly the inputs its evaluator needs and
//! turns them into a [`ValuationRequest`]. Percent flags are wrapped in
//! [`Rate`] here and nowhere else.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use intrinsic_common::DefaultsConfig;
use intrinsic_engine::{
    AssetInputs, DcfInputs, DdmInputs, Rate, RelativeInputs, RimInputs, ValuationModel,
    ValuationRequest,
};

/// Intrinsic - per-share intrinsic value under five valuation models.
#[derive(Parser, Debug)]
#[command(name = "intrinsic")]
#[command(version)]
#[command(about = "Comprehensive intrinsic value calculator (DCF, DDM, RIM, P/E, NAV).", long_about = None)]
pub struct Cli {
    /// Company name shown in the results heading
    #[arg(long, global = true)]
    pub company: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.intrinsic/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discounted Cash Flow valuation
    Dcf(DcfArgs),

    /// Dividend Discount Model valuation
    Ddm(DdmArgs),

    /// Residual Income Model valuation
    Rim(RimArgs),

    /// Relative valuation using an industry P/E multiple
    #[command(alias = "pe")]
    Relative(RelativeArgs),

    /// Asset-based (net asset value) valuation
    #[command(alias = "nav")]
    Asset(AssetArgs),

    /// List the available valuation models
    Models(ModelsArgs),
}

impl Commands {
    /// Build the valuation request, or `None` for non-valuation commands.
    pub fn request(&self, defaults: &DefaultsConfig) -> Option<ValuationRequest> {
        match self {
            Self::Dcf(args) => Some(ValuationRequest::Dcf(args.inputs())),
            Self::Ddm(args) => Some(ValuationRequest::Ddm(args.inputs())),
            Self::Rim(args) => Some(ValuationRequest::Rim(args.inputs(defaults))),
            Self::Relative(args) => Some(ValuationRequest::Relative(args.inputs())),
            Self::Asset(args) => Some(ValuationRequest::AssetBased(args.inputs())),
            Self::Models(_) => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Show only this model (dcf, ddm, rim, relative/pe, asset/nav)
    pub model: Option<ValuationModel>,
}

/// Cash flow, growth and balance sheet inputs for DCF.
#[derive(Args, Debug)]
pub struct DcfArgs {
    /// Operating cash, present year
    #[arg(long = "opc", default_value_t = 0.0, allow_negative_numbers = true)]
    pub operating_cash: f64,

    /// Operating cash, last year
    #[arg(long = "opc1", default_value_t = 0.0, allow_negative_numbers = true)]
    pub operating_cash_prior: f64,

    /// Operating cash, year before last
    #[arg(long = "opc2", default_value_t = 0.0, allow_negative_numbers = true)]
    pub operating_cash_two_prior: f64,

    /// Capital expenditure, present year
    #[arg(long = "ope", default_value_t = 0.0, allow_negative_numbers = true)]
    pub capex: f64,

    /// Capital expenditure, last year
    #[arg(long = "ope1", default_value_t = 0.0, allow_negative_numbers = true)]
    pub capex_prior: f64,

    /// Capital expenditure, year before last
    #[arg(long = "ope2", default_value_t = 0.0, allow_negative_numbers = true)]
    pub capex_two_prior: f64,

    /// Growth rate for the next 5 years (%)
    #[arg(long = "gr", default_value_t = 0.0, allow_negative_numbers = true)]
    pub near_term_growth: f64,

    /// Growth rate for years 6-10 (%)
    #[arg(long = "gr1", default_value_t = 0.0, allow_negative_numbers = true)]
    pub long_term_growth: f64,

    /// Terminal growth rate (%)
    #[arg(long = "tr", default_value_t = 0.0, allow_negative_numbers = true)]
    pub terminal_growth: f64,

    /// Discount rate (%)
    #[arg(long = "dr", default_value_t = 0.0, allow_negative_numbers = true)]
    pub discount_rate: f64,

    /// Total debt, current year
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub debt: f64,

    /// Cash and cash equivalents
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cash: f64,

    /// Outstanding shares
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub shares: f64,
}

impl DcfArgs {
    pub fn inputs(&self) -> DcfInputs {
        DcfInputs {
            operating_cash: self.operating_cash,
            operating_cash_prior: self.operating_cash_prior,
            operating_cash_two_prior: self.operating_cash_two_prior,
            capex: self.capex,
            capex_prior: self.capex_prior,
            capex_two_prior: self.capex_two_prior,
            near_term_growth: Rate::from_percent(self.near_term_growth),
            long_term_growth: Rate::from_percent(self.long_term_growth),
            terminal_growth: Rate::from_percent(self.terminal_growth),
            discount_rate: Rate::from_percent(self.discount_rate),
            total_debt: self.debt,
            cash_equivalents: self.cash,
            outstanding_shares: self.shares,
        }
    }
}

#[derive(Args, Debug)]
pub struct DdmArgs {
    /// Expected dividend next year
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dividend: f64,

    /// Dividend growth rate (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub growth: f64,

    /// Required rate of return (%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub required_return: f64,
}

impl DdmArgs {
    pub fn inputs(&self) -> DdmInputs {
        DdmInputs {
            next_dividend: self.dividend,
            growth_rate: Rate::from_percent(self.growth),
            required_return: Rate::from_percent(self.required_return),
        }
    }
}

/// RIM inputs. CAPM flags fall back to the configured defaults.
#[derive(Args, Debug)]
pub struct RimArgs {
    /// Book value per share
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub book_value: f64,

    /// Net income per share
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub net_income: f64,

    /// Risk-free rate (%) [default: 6.5]
    #[arg(long, allow_negative_numbers = true)]
    pub risk_free: Option<f64>,

    /// Beta, volatility relative to the market [default: 1.0]
    #[arg(long, allow_negative_numbers = true)]
    pub beta: Option<f64>,

    /// Expected market return (%) [default: 12.0]
    #[arg(long, allow_negative_numbers = true)]
    pub market_return: Option<f64>,
}

impl RimArgs {
    pub fn inputs(&self, defaults: &DefaultsConfig) -> RimInputs {
        RimInputs {
            book_value: self.book_value,
            net_income: self.net_income,
            risk_free_rate: Rate::from_percent(self.risk_free.unwrap_or(defaults.risk_free_rate)),
            beta: self.beta.unwrap_or(defaults.beta),
            market_return: Rate::from_percent(
                self.market_return.unwrap_or(defaults.market_return),
            ),
        }
    }
}

#[derive(Args, Debug)]
pub struct RelativeArgs {
    /// Industry P/E ratio
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub industry_pe: f64,

    /// Company EPS
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub eps: f64,
}

impl RelativeArgs {
    pub fn inputs(&self) -> RelativeInputs {
        RelativeInputs {
            industry_pe: self.industry_pe,
            eps: self.eps,
        }
    }
}

#[derive(Args, Debug)]
pub struct AssetArgs {
    /// Total assets
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub total_assets: f64,

    /// Total liabilities
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub total_liabilities: f64,

    /// Shares outstanding
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub shares: f64,
}

impl AssetArgs {
    pub fn inputs(&self) -> AssetInputs {
        AssetInputs {
            total_assets: self.total_assets,
            total_liabilities: self.total_liabilities,
            shares_outstanding: self.shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use intrinsic_engine::ValuationModel;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("intrinsic").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dcf_flags() {
        let cli = parse(&[
            "dcf", "--opc", "100", "--opc1", "100", "--opc2", "100", "--ope", "20", "--ope1",
            "20", "--ope2", "20", "--gr", "10", "--gr1", "5", "--tr", "3", "--dr", "10",
            "--debt", "50", "--cash", "20", "--shares", "10",
        ]);
        let request = cli.command.request(&DefaultsConfig::default()).unwrap();
        match request {
            ValuationRequest::Dcf(inputs) => {
                assert_eq!(inputs.free_cash_flows(), [80.0, 80.0, 80.0]);
                assert_eq!(inputs.discount_rate.as_percent(), 10.0);
                assert_eq!(inputs.net_debt(), 30.0);
                assert_eq!(inputs.outstanding_shares, 10.0);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_accepted() {
        let cli = parse(&["dcf", "--opc", "-50", "--gr", "-2.5"]);
        match cli.command.request(&DefaultsConfig::default()).unwrap() {
            ValuationRequest::Dcf(inputs) => {
                assert_eq!(inputs.operating_cash, -50.0);
                assert_eq!(inputs.near_term_growth.as_percent(), -2.5);
                assert_eq!(inputs.outstanding_shares, 1.0);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_rim_uses_configured_defaults() {
        let cli = parse(&["rim", "--book-value", "50", "--net-income", "8"]);
        match cli.command.request(&DefaultsConfig::default()).unwrap() {
            ValuationRequest::Rim(inputs) => {
                assert_eq!(inputs.risk_free_rate.as_percent(), 6.5);
                assert_eq!(inputs.beta, 1.0);
                assert_eq!(inputs.market_return.as_percent(), 12.0);
            }
            other => panic!("unexpected request: {other:?}"),
        }

        let cli = parse(&["rim", "--beta", "1.3", "--risk-free", "4"]);
        match cli.command.request(&DefaultsConfig::default()).unwrap() {
            ValuationRequest::Rim(inputs) => {
                assert_eq!(inputs.risk_free_rate.as_percent(), 4.0);
                assert_eq!(inputs.beta, 1.3);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_aliases_and_globals() {
        let cli = parse(&["nav", "--total-assets", "100", "--company", "Acme", "--json"]);
        assert_eq!(cli.company.as_deref(), Some("Acme"));
        assert!(cli.json);
        let request = cli.command.request(&DefaultsConfig::default()).unwrap();
        assert_eq!(request.model(), ValuationModel::AssetBased);

        let cli = parse(&["pe", "--industry-pe", "15", "--eps", "2"]);
        let request = cli.command.request(&DefaultsConfig::default()).unwrap();
        assert_eq!(request.model(), ValuationModel::Relative);
    }

    #[test]
    fn test_models_has_no_request() {
        let cli = parse(&["models"]);
        assert!(cli.command.request(&DefaultsConfig::default()).is_none());
    }

    #[test]
    fn test_models_filter_accepts_aliases() {
        match parse(&["models", "NAV"]).command {
            Commands::Models(args) => assert_eq!(args.model, Some(ValuationModel::AssetBased)),
            other => panic!("unexpected command: {other:?}"),
        }
        match parse(&["models", "pe"]).command {
            Commands::Models(args) => assert_eq!(args.model, Some(ValuationModel::Relative)),
            other => panic!("unexpected command: {other:?}"),
        }

        let err = Cli::try_parse_from(["intrinsic", "models", "capm"]).unwrap_err();
        assert!(err.to_string().contains("unknown valuation model: capm"));
    }
}
