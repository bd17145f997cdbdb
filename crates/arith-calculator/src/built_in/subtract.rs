//! Calculator for subtracting one numeric value from another
//!
//! Takes `minuend` and `subtrahend`, or the shared `a`/`b` aliases.

use std::collections::HashMap;

use arith_types::Number;

use crate::ops;
use crate::plugin::{
    CalculationResult, CalculatorPlugin, FIRST_OPERAND, SECOND_OPERAND, extract_operand,
};

#[derive(Debug, Default)]
pub struct SubtractCalculator;

impl CalculatorPlugin for SubtractCalculator {
    fn name(&self) -> &str {
        "subtract"
    }

    fn calculate(&self, args: &HashMap<String, &Number>) -> CalculationResult {
        let minuend = extract_operand(self.name(), args, "minuend", &FIRST_OPERAND)?;
        let subtrahend = extract_operand(self.name(), args, "subtrahend", &SECOND_OPERAND)?;
        Ok(ops::subtract(minuend, subtrahend))
    }
}
