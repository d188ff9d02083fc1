//! Error types for the Intrinsic tools.

use thiserror::Error;

/// Result type alias using the Intrinsic error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for configuration, IO and valuation failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A valuation model rejected its inputs
    #[error("{0}")]
    Valuation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an error with additional context.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Process exit code for this error.
    ///
    /// `2` for rejected inputs, `78` (EX_CONFIG) for configuration problems,
    /// `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Valuation(_) => 2,
            Self::Config(_) => 78,
            Self::WithContext { source, .. } => source.exit_code(),
            _ => 1,
        }
    }
}

/// Extension trait for adding context to any error type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Error::Valuation("x".into()), 2 ; "valuation")]
    #[test_case(Error::Config("x".into()), 78 ; "config")]
    #[test_case(Error::Io(std::io::Error::other("x")), 1 ; "io")]
    fn test_exit_codes(err: Error, code: i32) {
        assert_eq!(err.exit_code(), code);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::Valuation("Outstanding shares must be greater than 0".into());
        let with_ctx = err.with_context("dcf");
        assert!(matches!(with_ctx, Error::WithContext { .. }));
        assert_eq!(with_ctx.exit_code(), 2);
        assert_eq!(
            with_ctx.to_string(),
            "dcf: Outstanding shares must be greater than 0"
        );
    }

    #[test]
    fn test_result_ext() {
        let read: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        let err = read.context("reading config").unwrap_err();
        assert_eq!(err.to_string(), "reading config: IO error: no such file");
        assert_eq!(err.exit_code(), 1);
    }
}
