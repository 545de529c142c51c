//! Arithmetic of the calculator: one binary operation on two textual operands.
use crate::engine::command::Operator;
use crate::numbers::{parse_operand, to_numeral};
use std::fmt::{Display, Formatter};

/// Text shown for the error sentinel.
pub const ERROR_TEXT: &str = "Error";

/// An operand or a result: numeral text, or the sticky error sentinel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    Numeral(String),
    Error,
}
impl Value {
    #[must_use]
    pub fn numeral(text: impl Into<String>) -> Self {
        Self::Numeral(text.into())
    }
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
    /// Numeral text, or [`ERROR_TEXT`] for the sentinel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeral(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies `operator` to `left` and `right`.
///
/// - either operand is the sentinel: [`Value::Error`]
/// - an operand is not a finite numeral: `right` unchanged
/// - division by zero or a result out of `f64` range: [`Value::Error`]
///
/// Results are canonical numerals, see [`to_numeral`].
#[must_use]
pub fn compute(left: &Value, right: &Value, operator: Operator) -> Value {
    let (Value::Numeral(left_text), Value::Numeral(right_text)) = (left, right) else {
        return Value::Error;
    };
    let (Some(first), Some(second)) = (parse_operand(left_text), parse_operand(right_text)) else {
        tracing::warn!(left = %left_text, right = %right_text, "non-numeric operand, keeping right");
        return right.clone();
    };
    let result = match operator {
        Operator::Add => first + second,
        Operator::Subtract => first - second,
        Operator::Multiply => first * second,
        Operator::Divide if second == 0.0 => return Value::Error,
        Operator::Divide => first / second,
    };
    if result.is_finite() {
        Value::Numeral(to_numeral(result))
    } else {
        Value::Error
    }
}
