//! Add Calculator
//!
//! Supported aliases for inputs:
//!   * First: `addend1`, `a`, `x`, `value1`
//!   * Second: `addend2`, `b`, `y`, `value2`
//!
use std::collections::HashMap;

use arith_types::Number;

use crate::ops;
use crate::plugin::{
    CalculationResult, CalculatorPlugin, FIRST_OPERAND, SECOND_OPERAND, extract_operand,
};

#[derive(Debug, Default)]
pub struct AddCalculator;

impl CalculatorPlugin for AddCalculator {
    fn name(&self) -> &str {
        "add"
    }

    fn calculate(&self, args: &HashMap<String, &Number>) -> CalculationResult {
        let a = extract_operand(self.name(), args, "addend1", &FIRST_OPERAND)?;
        let b = extract_operand(self.name(), args, "addend2", &SECOND_OPERAND)?;
        Ok(ops::add(a, b))
    }
}
