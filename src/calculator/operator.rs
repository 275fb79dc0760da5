//! Binary operators and the shared computation helper.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CalcError;

/// One of the four arithmetic buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown on the button and in history records.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero follows IEEE 754 and yields an infinity or `NaN`.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts the keypad symbols plus the ASCII spellings `*`, `x` and `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "*" | "x" | "X" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(CalcError::InvalidOperator(other.to_string())),
        }
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// The operation waiting for its right operand.
///
/// `Equals` is what `evaluate()` leaves behind. It is not a real operator:
/// computing against it just hands back the right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingOperator {
    Binary(Operator),
    Equals,
}

impl PendingOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.symbol(),
            Self::Equals => "=",
        }
    }

    pub fn as_binary(self) -> Option<Operator> {
        match self {
            Self::Binary(op) => Some(op),
            Self::Equals => None,
        }
    }
}

impl From<Operator> for PendingOperator {
    fn from(op: Operator) -> Self {
        Self::Binary(op)
    }
}

impl fmt::Display for PendingOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for PendingOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Compute `a op b`. Anything but a binary operator returns `b` unchanged.
pub fn calculate(a: f64, b: f64, op: PendingOperator) -> f64 {
    match op {
        PendingOperator::Binary(op) => op.apply(a, b),
        PendingOperator::Equals => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_binary() {
        assert_eq!(calculate(1.0, 2.0, Operator::Add.into()), 3.0);
        assert_eq!(calculate(5.0, 8.0, Operator::Subtract.into()), -3.0);
        assert_eq!(calculate(4.0, 2.5, Operator::Multiply.into()), 10.0);
        assert_eq!(calculate(9.0, 3.0, Operator::Divide.into()), 3.0);
    }

    #[test]
    fn test_calculate_equals_returns_right_operand() {
        assert_eq!(calculate(3.0, 7.0, PendingOperator::Equals), 7.0);
    }

    #[test]
    fn test_division_by_zero() {
        let result = calculate(9.0, 0.0, Operator::Divide.into());
        assert!(result.is_infinite() && result.is_sign_positive());
        assert!(calculate(0.0, 0.0, Operator::Divide.into()).is_nan());
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!(
            "^".parse::<Operator>(),
            Err(CalcError::InvalidOperator("^".to_string()))
        );
    }
}
