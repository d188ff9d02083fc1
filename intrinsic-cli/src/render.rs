//! Result rendering for the terminal and for `--json`.

use console::style;
use serde::Serialize;

use intrinsic_common::util::{format_currency, format_percent};
use intrinsic_common::DisplayConfig;
use intrinsic_engine::{
    DcfResult, ValuationError, ValuationErrorKind, ValuationModel, ValuationOutcome,
};

/// Severity of a result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
}

/// One labelled figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl ReportLine {
    fn new(label: &'static str, value: String, tone: Tone) -> Self {
        Self { label, value, tone }
    }

    fn to_text(&self, styled: bool) -> String {
        let text = format!("{}: {}", self.label, self.value);
        if !styled {
            return text;
        }
        match self.tone {
            Tone::Success => style(text).green().bold().to_string(),
            Tone::Info => style(text).cyan().to_string(),
            Tone::Warning => style(text).yellow().to_string(),
        }
    }
}

/// One year of the DCF projection table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    pub year: usize,
    pub projected: String,
    pub discounted: String,
}

/// Everything printed for one successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub heading: String,
    pub lines: Vec<ReportLine>,
    pub projection: Vec<ProjectionRow>,
    pub details: Vec<ReportLine>,
}

impl Report {
    pub fn to_text(&self, styled: bool) -> String {
        let mut out = Vec::new();

        let heading = if styled {
            style(&self.heading).bold().to_string()
        } else {
            self.heading.clone()
        };
        out.push(heading);
        out.push("=".repeat(self.heading.chars().count()));

        out.extend(self.lines.iter().map(|line| line.to_text(styled)));

        if !self.projection.is_empty() {
            out.push(String::new());
            out.push(format!("{:>4}  {:>16}  {:>16}", "Year", "Projected FCF", "Present Value"));
            for row in &self.projection {
                out.push(format!(
                    "{:>4}  {:>16}  {:>16}",
                    row.year, row.projected, row.discounted
                ));
            }
        }

        if !self.details.is_empty() {
            out.push(String::new());
            out.extend(self.details.iter().map(|line| line.to_text(false)));
        }

        out.join("\n")
    }
}

/// Formats outcomes with the configured currency symbol and precision.
pub struct Renderer<'a> {
    display: &'a DisplayConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(display: &'a DisplayConfig) -> Self {
        Self { display }
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, &self.display.currency_symbol, self.display.decimals)
    }

    fn percent(&self, percent: f64) -> String {
        format_percent(percent, self.display.decimals)
    }

    /// Company name for headings, falling back to the configured default.
    pub fn company<'c>(&'c self, company: Option<&'c str>) -> &'c str {
        match company.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.display.default_company_name,
        }
    }

    pub fn report(&self, outcome: &ValuationOutcome, company: Option<&str>) -> Report {
        let heading = format!("Results for {}", self.company(company));
        let mut report = Report {
            heading,
            lines: Vec::new(),
            projection: Vec::new(),
            details: Vec::new(),
        };

        match outcome {
            ValuationOutcome::Dcf(result) => self.fill_dcf(&mut report, result),
            ValuationOutcome::Ddm(result) => report.lines.push(ReportLine::new(
                "Intrinsic Value (DDM)",
                self.money(result.intrinsic_value),
                Tone::Success,
            )),
            ValuationOutcome::Rim(result) => {
                report.lines.push(ReportLine::new(
                    "Cost of Equity (CAPM)",
                    self.percent(result.cost_of_equity.as_percent()),
                    Tone::Success,
                ));
                report.lines.push(ReportLine::new(
                    "Intrinsic Value (RIM)",
                    self.money(result.intrinsic_value),
                    Tone::Success,
                ));
                report.details = vec![
                    ReportLine::new("Equity Charge", self.money(result.equity_charge), Tone::Info),
                    ReportLine::new(
                        "Residual Income",
                        self.money(result.residual_income),
                        Tone::Info,
                    ),
                ];
            }
            ValuationOutcome::Relative(result) => report.lines.push(ReportLine::new(
                "Intrinsic Value (Relative Valuation)",
                self.money(result.intrinsic_value),
                Tone::Success,
            )),
            ValuationOutcome::AssetBased(result) => report.lines.push(ReportLine::new(
                "Intrinsic Value (NAV)",
                self.money(result.nav_per_share),
                Tone::Success,
            )),
        }

        report
    }

    fn fill_dcf(&self, report: &mut Report, result: &DcfResult) {
        report.lines = vec![
            ReportLine::new(
                "Intrinsic Value of Share Price",
                self.money(result.intrinsic_price),
                Tone::Success,
            ),
            ReportLine::new("Upper Bound", self.money(result.upper_bound), Tone::Info),
            ReportLine::new("Lower Bound", self.money(result.lower_bound), Tone::Info),
            ReportLine::new(
                "Margin of Safety Price",
                self.money(result.margin_of_safety_price),
                Tone::Warning,
            ),
        ];

        let breakdown = &result.breakdown;
        report.projection = breakdown
            .projected_cash_flows
            .iter()
            .zip(breakdown.discounted_cash_flows.iter())
            .enumerate()
            .map(|(i, (projected, discounted))| ProjectionRow {
                year: i + 1,
                projected: self.money(*projected),
                discounted: self.money(*discounted),
            })
            .collect();

        report.details = vec![
            ReportLine::new(
                "Average Free Cash Flow",
                self.money(breakdown.average_free_cash_flow),
                Tone::Info,
            ),
            ReportLine::new("Terminal Value", self.money(breakdown.terminal_value), Tone::Info),
            ReportLine::new(
                "Present Value of Terminal Value",
                self.money(breakdown.discounted_terminal_value),
                Tone::Info,
            ),
            ReportLine::new(
                "Enterprise Value",
                self.money(breakdown.enterprise_value),
                Tone::Info,
            ),
            ReportLine::new("Net Debt", self.money(breakdown.net_debt), Tone::Info),
            ReportLine::new("Equity Value", self.money(breakdown.equity_value), Tone::Info),
        ];
    }
}

/// `models` subcommand listing, optionally narrowed to one model.
pub fn model_catalogue(only: Option<ValuationModel>) -> String {
    let mut out = Vec::new();
    let models = ValuationModel::ALL
        .into_iter()
        .filter(|model| only.map_or(true, |selected| selected == *model));
    for model in models {
        out.push(format!("{:<9} {}", model.short_name(), model.display_name()));
        out.push(format!("{:<9} {}", "", model.usage()));
    }
    out.join("\n")
}

/// Text printed to stderr for a rejected evaluation.
pub fn error_text(err: &ValuationError) -> String {
    format!("Error: {err}")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    company: &'a str,
    model_name: &'static str,
    headline_value: f64,
    outcome: &'a ValuationOutcome,
}

#[derive(Serialize)]
struct JsonErrorBody {
    kind: ValuationErrorKind,
    message: String,
}

#[derive(Serialize)]
struct JsonError {
    error: JsonErrorBody,
}

/// JSON document for a successful evaluation.
pub fn outcome_json(
    outcome: &ValuationOutcome,
    company: &str,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        company,
        model_name: outcome.model().display_name(),
        headline_value: outcome.headline_value(),
        outcome,
    })
}

/// JSON document for a rejected evaluation.
pub fn error_json(err: &ValuationError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonError {
        error: JsonErrorBody {
            kind: err.kind(),
            message: err.to_string(),
        },
    })
}
