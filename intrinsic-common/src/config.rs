//! Configuration management for the Intrinsic tools.
//!
//! Configuration lives in a single optional file at `~/.intrinsic/config.json`.
//! A missing file means all defaults.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (INTRINSIC_* prefix)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `INTRINSIC_LOG_LEVEL` → observability.log_level
//! - `INTRINSIC_LOG_FORMAT` → observability.log_format
//! - `INTRINSIC_CURRENCY_SYMBOL` → display.currency_symbol
//! - `INTRINSIC_DECIMALS` → display.decimals

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ResultExt};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".intrinsic"),
        |dirs| dirs.home_dir().join(".intrinsic"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Observability
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,

    /// Additional module targets held at `warn`.
    #[serde(default)]
    pub excluded_targets: Vec<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            excluded_targets: Vec::new(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Display
// ============================================================================

/// How results are presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol placed before money amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Decimal places for money and percentages
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Name used in headings when no company name is given
    #[serde(default = "default_company_name")]
    pub default_company_name: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
            default_company_name: default_company_name(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".into()
}

fn default_decimals() -> usize {
    2
}

fn default_company_name() -> String {
    "the company".into()
}

// ============================================================================
// Input Defaults
// ============================================================================

/// Prefilled CAPM inputs for the residual income model (percent values).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    #[serde(default = "default_beta")]
    pub beta: f64,

    #[serde(default = "default_market_return")]
    pub market_return: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            beta: default_beta(),
            market_return: default_market_return(),
        }
    }
}

fn default_risk_free_rate() -> f64 {
    6.5
}

fn default_beta() -> f64 {
    1.0
}

fn default_market_return() -> f64 {
    12.0
}

// ============================================================================
// Root
// ============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// JSON Schema reference
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Result presentation
    #[serde(default)]
    pub display: DisplayConfig,

    /// Prefilled model inputs
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config from {}: {e}", path.display()))
        })
    }

    /// Load configuration with environment variable overrides.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup (environment in production).
    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("INTRINSIC_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("INTRINSIC_LOG_FORMAT") {
            self.observability.log_format = format;
        }
        if let Some(symbol) = lookup("INTRINSIC_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
        if let Some(decimals) = lookup("INTRINSIC_DECIMALS") {
            match decimals.parse() {
                Ok(d) => self.display.decimals = d,
                Err(_) => tracing::warn!(value = %decimals, "Ignoring invalid INTRINSIC_DECIMALS"),
            }
        }
    }
}
