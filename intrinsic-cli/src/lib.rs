//! Intrinsic CLI - command-line front end for the valuation engine.
//!
//! The binary is a thin shell over [`load_config`] and [`execute`], which
//! are kept here so they can be driven from tests without a process.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod args;
pub mod render;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use intrinsic_common::logging::generate_evaluation_id;
use intrinsic_common::{Config, Error};
use intrinsic_engine::ValuationEngine;

pub use args::{Cli, Commands};
use render::Renderer;

/// What a command produced.
#[derive(Debug)]
pub enum Execution {
    /// Output for stdout
    Completed(String),
    /// The model rejected its inputs
    Rejected {
        /// Rendered rejection, text or JSON
        output: String,
        error: Error,
    },
}

impl Execution {
    /// Process exit code: 0 on success, otherwise the rejection's code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed(_) => 0,
            Self::Rejected { error, .. } => error.exit_code(),
        }
    }
}

/// Load the configuration named on the command line (or the default file),
/// apply environment overrides and the `--log-level` flag, then validate.
pub fn load_config(cli: &Cli) -> intrinsic_common::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load_with_env()?,
    };

    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    config.validated()
}

/// Run the selected subcommand.
pub fn execute(cli: &Cli, config: &Config) -> Result<Execution> {
    if let Commands::Models(args) = &cli.command {
        return Ok(Execution::Completed(render::model_catalogue(args.model)));
    }
    let request = cli
        .command
        .request(&config.defaults)
        .context("No valuation model selected")?;

    let evaluation_id = generate_evaluation_id();
    let span = info_span!(
        "evaluation",
        id = %evaluation_id,
        model = request.model().short_name()
    );
    let _guard = span.enter();

    let renderer = Renderer::new(&config.display);
    let company = renderer.company(cli.company.as_deref());
    debug!(company = %company, "Running valuation");

    match ValuationEngine::new().evaluate(&request) {
        Ok(outcome) => {
            info!(headline_value = outcome.headline_value(), "Valuation succeeded");
            let output = if cli.json {
                render::outcome_json(&outcome, company)?
            } else {
                renderer
                    .report(&outcome, Some(company))
                    .to_text(console::colors_enabled())
            };
            Ok(Execution::Completed(output))
        }
        Err(err) => {
            info!(kind = %err.kind(), error = %err, "Valuation rejected");
            let output = if cli.json {
                render::error_json(&err)?
            } else {
                render::error_text(&err)
            };
            Ok(Execution::Rejected {
                output,
                error: Error::Valuation(err.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("intrinsic").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_models_listing() {
        let execution = execute(&cli(&["models"]), &Config::default()).unwrap();
        assert_eq!(execution.exit_code(), 0);
        match execution {
            Execution::Completed(text) => assert!(text.contains("Dividend Discount Model (DDM)")),
            other => panic!("unexpected execution: {other:?}"),
        }
    }

    #[test]
    fn test_rejected_ddm() {
        let execution = execute(
            &cli(&["ddm", "--dividend", "5", "--growth", "8", "--required-return", "8"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(execution.exit_code(), 2);
        match execution {
            Execution::Rejected { output, error } => {
                assert!(output.starts_with("Error: Required return must be greater than"));
                assert!(matches!(error, Error::Valuation(_)));
            }
            other => panic!("unexpected execution: {other:?}"),
        }
    }

    #[test]
    fn test_json_output() {
        let execution = execute(
            &cli(&["relative", "--industry-pe", "15", "--eps", "2", "--json"]),
            &Config::default(),
        )
        .unwrap();
        let Execution::Completed(text) = execution else {
            panic!("expected success");
        };
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["company"], "the company");
        assert_eq!(json["outcome"]["model"], "relative");
        assert_eq!(json["outcome"]["intrinsic_value"], 30.0);
    }

    #[test]
    fn test_log_level_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"observability": {"log_level": "info"}}"#).unwrap();

        let parsed = cli(&[
            "models",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "debug",
        ]);
        let config = load_config(&parsed).unwrap();
        assert_eq!(config.observability.log_level, "debug");

        let parsed = cli(&["models", "--config", path.to_str().unwrap(), "--log-level", "loud"]);
        let err = load_config(&parsed).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }
}
