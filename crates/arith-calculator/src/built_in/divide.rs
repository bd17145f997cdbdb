//! Calculator for dividing one numeric value by another
//!
//! Fails with `CalculatorError::DivisionByZero` when the divisor is zero.

use std::collections::HashMap;

use arith_types::Number;

use crate::config::DivisionMode;
use crate::ops;
use crate::plugin::{
    CalculationResult, CalculatorPlugin, FIRST_OPERAND, SECOND_OPERAND, extract_operand,
};

/// Calculator for division operations
///
/// # Arguments
/// * `a` / `dividend` - Value to divide
/// * `b` / `divisor` - Value to divide by, must not be zero
#[derive(Debug, Default)]
pub struct DivideCalculator {
    mode: DivisionMode,
}

impl DivideCalculator {
    pub fn new(mode: DivisionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DivisionMode {
        self.mode
    }
}

impl CalculatorPlugin for DivideCalculator {
    fn name(&self) -> &str {
        "divide"
    }

    fn calculate(&self, args: &HashMap<String, &Number>) -> CalculationResult {
        let dividend = extract_operand(self.name(), args, "dividend", &FIRST_OPERAND)?;
        let divisor = extract_operand(self.name(), args, "divisor", &SECOND_OPERAND)?;
        ops::divide_with(dividend, divisor, self.mode)
    }
}
