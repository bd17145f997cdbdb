use arith_types::Number;
use std::collections::HashMap;

use crate::error::{CalculatorError, CalculatorResult};

pub type CalculationResult = CalculatorResult<Number>;

/// Aliases accepted for the first operand of every built-in calculator
pub const FIRST_OPERAND: [&str; 3] = ["a", "x", "value1"];
/// Aliases accepted for the second operand of every built-in calculator
pub const SECOND_OPERAND: [&str; 3] = ["b", "y", "value2"];

/// A trait for calculator plugins.
pub trait CalculatorPlugin: Send + Sync {
    /// The name of the calculator.
    fn name(&self) -> &str;

    /// Performs the calculation.
    fn calculate(&self, args: &HashMap<String, &Number>) -> CalculationResult;
}

/// Looks up the first of `names` present in `args`.
///
/// `specific` is checked before the shared aliases, so `dividend` wins over `a`.
pub fn extract_operand(
    calculator: &str,
    args: &HashMap<String, &Number>,
    specific: &str,
    shared: &[&str],
) -> CalculationResult {
    std::iter::once(specific)
        .chain(shared.iter().copied())
        .find_map(|name| args.get(name).map(|n| **n))
        .ok_or_else(|| CalculatorError::MissingArgument {
            calculator: calculator.to_string(),
            tried: std::iter::once(specific)
                .chain(shared.iter().copied())
                .map(str::to_string)
                .collect(),
        })
}
