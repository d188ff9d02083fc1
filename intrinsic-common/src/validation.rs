//! Configuration validation.
//!
//! Checks configuration fields are present and within valid ranges before
//! anything is logged or displayed with them.

use thiserror::Error;

use crate::config::{Config, DefaultsConfig, DisplayConfig, ObservabilityConfig};
use crate::error::Error as CommonError;

/// Accepted log levels.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted log formats.
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Largest supported number of display decimals.
pub const MAX_DECIMALS: usize = 8;

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

impl Config {
    /// Validate the entire configuration.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors: Vec<ValidationError> = [
            self.observability.validate(),
            self.display.validate(),
            self.defaults.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.remove(0))
        } else {
            Err(ValidationError::Multiple(errors))
        }
    }

    /// Validate and hand the configuration back, failing with a
    /// configuration error.
    pub fn validated(self) -> crate::error::Result<Self> {
        self.validate().map_err(|e| {
            CommonError::Config(e.to_string()).with_context("Invalid configuration")
        })?;
        Ok(self)
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        let level = self.log_level.to_ascii_lowercase();
        // EnvFilter directives such as "info,intrinsic_engine=debug" are accepted as-is
        if !level.contains(['=', ',']) && !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("'{}' is not one of {}", self.log_level, LOG_LEVELS.join(", ")),
            });
        }

        if !LOG_FORMATS.contains(&self.log_format.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("'{}' is not one of {}", self.log_format, LOG_FORMATS.join(", ")),
            });
        }

        Ok(())
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "display.currency_symbol".into(),
            });
        }

        if self.decimals > MAX_DECIMALS {
            return Err(ValidationError::InvalidValue {
                field: "display.decimals".into(),
                reason: format!("{} exceeds the maximum of {MAX_DECIMALS}", self.decimals),
            });
        }

        Ok(())
    }
}

impl Validate for DefaultsConfig {
    fn validate(&self) -> ValidationResult<()> {
        let fields = [
            ("defaults.risk_free_rate", self.risk_free_rate),
            ("defaults.beta", self.beta),
            ("defaults.market_return", self.market_return),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    reason: "must be a finite number".into(),
                });
            }
        }

        Ok(())
    }
}
