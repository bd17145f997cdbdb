//! The four arithmetic operations.
//!
//! Two integer operands are combined with checked `i64` arithmetic; when the
//! exact result does not fit, the result is promoted to a float instead of
//! wrapping or panicking. Any pair involving a float is computed in `f64`.

use arith_types::Number;
use tracing::trace;

use crate::config::DivisionMode;
use crate::error::{CalculatorError, CalculatorResult};

fn or_promoted(checked: Option<i64>, promoted: impl FnOnce() -> f64) -> Number {
    checked.map_or_else(|| Number::Float(promoted()), Number::Integer)
}

/// Returns `a + b`.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    trace!(%a, %b, "add");
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => {
            or_promoted(x.checked_add(y), || a.as_f64() + b.as_f64())
        }
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// Returns `a - b`.
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    trace!(%a, %b, "subtract");
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => {
            or_promoted(x.checked_sub(y), || a.as_f64() - b.as_f64())
        }
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

/// Returns `a * b`.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    trace!(%a, %b, "multiply");
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => {
            or_promoted(x.checked_mul(y), || a.as_f64() * b.as_f64())
        }
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

/// Returns `a / b` using true division.
///
/// Two integer operands that divide exactly give an `Integer`; any other
/// quotient is a `Float`.
///
/// # Errors
///
/// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> CalculatorResult<Number> {
    divide_with(a, b, DivisionMode::True)
}

/// Returns `a / b`, dividing two integer operands according to `mode`.
///
/// # Errors
///
/// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
pub fn divide_with(
    a: impl Into<Number>,
    b: impl Into<Number>,
    mode: DivisionMode,
) -> CalculatorResult<Number> {
    let (a, b) = (a.into(), b.into());
    trace!(%a, %b, %mode, "divide");
    if b.is_zero() {
        return Err(CalculatorError::DivisionByZero { dividend: a });
    }

    let quotient = match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => match mode {
            // checked_rem is None only for i64::MIN / -1
            DivisionMode::True => match x.checked_rem(y) {
                Some(0) => or_promoted(x.checked_div(y), || a.as_f64() / b.as_f64()),
                _ => Number::Float(a.as_f64() / b.as_f64()),
            },
            DivisionMode::Truncating => {
                or_promoted(x.checked_div(y), || (a.as_f64() / b.as_f64()).trunc())
            }
        },
        _ => Number::Float(a.as_f64() / b.as_f64()),
    };
    Ok(quotient)
}
