use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// One of the four arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, failing on a zero divisor
    Divide,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 4] =
        [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide];

    /// Name under which the built-in calculator for this operation is registered
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Arithmetic symbol accepted by `FromStr`
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            _ => Err(CalculatorError::UnknownOperation { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_symbols_and_aliases() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("MUL".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!(" div ".parse::<Operation>().unwrap(), Operation::Divide);

        let err = "pow".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalculatorError::UnknownOperation { name: "pow".to_string() });
    }

    #[test]
    fn display_matches_registered_name() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
            assert_eq!(op.symbol().to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Operation::Divide).unwrap(), "\"divide\"");
        let op: Operation = serde_json::from_str("\"subtract\"").unwrap();
        assert_eq!(op, Operation::Subtract);
    }
}
