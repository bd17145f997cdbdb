//! Calculator configuration
//!
//! The only tunable is how two integer operands are divided. Configuration
//! can come from defaults, a JSON document, or the `ARITH_DIVISION_MODE`
//! environment variable.

use crate::error::{CalculatorError, CalculatorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`CalculatorConfig::from_environment`]
pub const DIVISION_MODE_ENV: &str = "ARITH_DIVISION_MODE";

/// How `Integer / Integer` is evaluated. Float operands always use true division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMode {
    /// Exact quotients stay integers, everything else becomes a float
    #[default]
    True,
    /// Integer division truncated toward zero
    Truncating,
}

impl FromStr for DivisionMode {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" => Ok(DivisionMode::True),
            "truncating" => Ok(DivisionMode::Truncating),
            other => Err(CalculatorError::configuration(
                "division",
                format!("expected 'true' or 'truncating', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionMode::True => write!(f, "true"),
            DivisionMode::Truncating => write!(f, "truncating"),
        }
    }
}

/// Configuration for a [`crate::Calculator`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Integer division behaviour
    pub division: DivisionMode,
}

impl CalculatorConfig {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_environment() -> CalculatorResult<Self> {
        match std::env::var(DIVISION_MODE_ENV) {
            Ok(raw) => Ok(Self { division: raw.parse()? }),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(CalculatorError::configuration("division", e.to_string())),
        }
    }

    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> CalculatorResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CalculatorError::configuration("calculator_config", e.to_string()))
    }

    pub fn with_division(mut self, division: DivisionMode) -> Self {
        self.division = division;
        self
    }
}
