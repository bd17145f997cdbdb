//! Calculator for multiplying two numeric values
//!
//! This calculator performs basic multiplication operations on numeric values.

use std::collections::HashMap;

use arith_types::Number;

use crate::ops;
use crate::plugin::{
    CalculationResult, CalculatorPlugin, FIRST_OPERAND, SECOND_OPERAND, extract_operand,
};

/// Calculator for multiplication operations
///
/// # Arguments
/// * `a` / `multiplicand` - First numeric value to multiply
/// * `b` / `multiplier` - Second numeric value to multiply
///
/// # Returns
/// The product of `a` and `b`, an `Integer` when both are integers and it fits
#[derive(Debug, Default)]
pub struct MultiplyCalculator;

impl CalculatorPlugin for MultiplyCalculator {
    fn name(&self) -> &str {
        "multiply"
    }

    fn calculate(&self, args: &HashMap<String, &Number>) -> CalculationResult {
        let a = extract_operand(self.name(), args, "multiplicand", &FIRST_OPERAND)?;
        let b = extract_operand(self.name(), args, "multiplier", &SECOND_OPERAND)?;
        Ok(ops::multiply(a, b))
    }
}
