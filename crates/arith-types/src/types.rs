use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

/// A numeric operand or result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed 64-bit integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
}

impl Number {
    /// Float view of the value, regardless of variant.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Integer value, if this is the `Integer` variant.
    #[must_use]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(i),
            Self::Float(_) => None,
        }
    }

    /// True for `Integer(0)`, `Float(0.0)` and `Float(-0.0)`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Whether this is the `Integer` variant
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Get the type name as a string
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Neg for Number {
    type Output = Self;

    // `-i64::MIN` does not fit, so it is promoted like any other overflow.
    fn neg(self) -> Self {
        match self {
            Self::Integer(i) => {
                i.checked_neg().map_or_else(|| Self::Float(-self.as_f64()), Self::Integer)
            }
            Self::Float(f) => Self::Float(-f),
        }
    }
}

/// 2^63, the first float above `i64::MAX`; `-2^63` is exactly `i64::MIN`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float, without rounding the integer.
#[allow(clippy::cast_possible_truncation)]
fn cmp_integer_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    // in range, so the truncated value converts to i64 exactly
    let whole = f.trunc();
    Some(i.cmp(&(whole as i64)).then_with(|| whole.partial_cmp(&f).unwrap_or(Ordering::Equal)))
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Integer(a), Self::Float(b)) => cmp_integer_float(a, b),
            (Self::Float(a), Self::Integer(b)) => cmp_integer_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Conversions between `Number` and `serde_json::Value`.
// -------------------------------------------------------------------------------------------------

/// JSON has no NaN or infinity, so non-finite floats become `Value::Null`.
impl From<Number> for serde_json::Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(i) => Self::Number(serde_json::Number::from(i)),
            Number::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
        }
    }
}

impl TryFrom<&serde_json::Value> for Number {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(anyhow!("Unsupported number value: {}", n))
                }
            }
            other => Err(anyhow!("Expected a JSON number, found {}", other)),
        }
    }
}
