//! Binary operators offered by the keypad.

use crate::keypad::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four arithmetic operators.
///
/// Operators are evaluated strictly left to right; there is no precedence
/// between them. Serialized as their keypad symbol.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Operation;
///
/// let op: Operation = "÷".parse().unwrap();
/// assert_eq!(op, Operation::Divide);
/// assert_eq!(op.apply(1.0, 0.0), f64::INFINITY);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// All operators in keypad order (top to bottom).
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Subtract,
        Operation::Add,
    ];

    /// The symbol shown on the key and in the display.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '÷',
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not an error: it yields a signed infinity, or
    /// `NaN` for `0 ÷ 0`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operation {
    type Error = InputError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '÷' => Ok(Self::Divide),
            other => Err(InputError::UnknownOperation(other.to_string())),
        }
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(InputError::UnknownOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_back_to_operations() {
        for op in Operation::ALL {
            assert_eq!(Operation::try_from(op.symbol()).unwrap(), op);
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn slash_is_not_an_operator_symbol() {
        assert_eq!(
            Operation::try_from('/'),
            Err(InputError::UnknownOperation("/".to_string()))
        );
    }

    #[test]
    fn multi_character_input_is_rejected() {
        assert!("++".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn arithmetic_follows_ieee_semantics() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.5, 4.0), 10.0);
        assert_eq!(Operation::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn operation_serializes_as_symbol() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"÷\"");
        let op: Operation = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(op, Operation::Multiply);
    }
}
