//! Error handling for calculator operations
//!
//! Every fallible operation in this crate returns a [`CalculatorError`]. Errors
//! are handed straight back to the caller and are never logged or retried here.

use arith_types::Number;
use std::fmt;
use thiserror::Error;

/// Error type for calculator operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// The divisor of a division was zero
    #[error("Cannot divide by zero: {dividend} / 0")]
    DivisionByZero { dividend: Number },

    /// A named calculator was called without one of its operands
    #[error("Calculator '{calculator}' is missing a numeric argument; tried {tried:?}")]
    MissingArgument { calculator: String, tried: Vec<String> },

    /// No calculator is registered under the requested name
    #[error("calculator '{name}' not found")]
    UnknownCalculator { name: String },

    /// An operation name or symbol could not be parsed
    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Configuration could not be loaded
    #[error("Configuration error for '{setting}': {message}")]
    Configuration { setting: String, message: String },
}

/// Broad classification of a [`CalculatorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// An operand or name supplied by the caller was rejected
    InvalidArgument,
    /// The requested calculator does not exist
    NotFound,
    /// Configuration could not be loaded
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
            ErrorKind::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

impl CalculatorError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalculatorError::DivisionByZero { .. } => "division_by_zero",
            CalculatorError::MissingArgument { .. } => "missing_argument",
            CalculatorError::UnknownCalculator { .. } => "unknown_calculator",
            CalculatorError::UnknownOperation { .. } => "unknown_operation",
            CalculatorError::Configuration { .. } => "configuration",
        }
    }

    /// Get the broad classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::DivisionByZero { .. }
            | CalculatorError::MissingArgument { .. }
            | CalculatorError::UnknownOperation { .. } => ErrorKind::InvalidArgument,
            CalculatorError::UnknownCalculator { .. } => ErrorKind::NotFound,
            CalculatorError::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// Whether this is [`CalculatorError::DivisionByZero`]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, CalculatorError::DivisionByZero { .. })
    }

    /// Create a configuration error for `setting`
    pub fn configuration(setting: &str, message: impl Into<String>) -> Self {
        Self::Configuration { setting: setting.to_string(), message: message.into() }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_an_invalid_argument() {
        let err = CalculatorError::DivisionByZero { dividend: Number::Integer(10) };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.category(), "division_by_zero");
        assert!(err.is_division_by_zero());
        assert_eq!(err.to_string(), "Cannot divide by zero: 10 / 0");
    }

    #[test]
    fn kinds_and_categories() {
        let unknown = CalculatorError::UnknownCalculator { name: "pow".to_string() };
        assert_eq!(unknown.kind(), ErrorKind::NotFound);
        assert_eq!(unknown.to_string(), "calculator 'pow' not found");

        assert_eq!(unknown.category(), "unknown_calculator");

        let missing = CalculatorError::MissingArgument {
            calculator: "add".to_string(),
            tried: vec!["a".to_string()],
        };
        assert_eq!(missing.kind(), ErrorKind::InvalidArgument);
        assert_eq!(missing.category(), "missing_argument");

        let operation = CalculatorError::UnknownOperation { name: "%".to_string() };
        assert_eq!(operation.kind(), ErrorKind::InvalidArgument);
        assert_eq!(operation.category(), "unknown_operation");
        assert_eq!(operation.kind().to_string(), "INVALID_ARGUMENT");

        let config = CalculatorError::configuration("division", "bad value");
        assert_eq!(config.kind(), ErrorKind::Configuration);
        assert_eq!(config.category(), "configuration");
        assert_eq!(config.kind().to_string(), "CONFIGURATION");
        assert!(!config.is_division_by_zero());
    }
}
