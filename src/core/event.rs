//! Events accepted by the calculator reducer.

use super::operation::Operation;
use crate::keypad::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single character that can be appended to an operand: `0`-`9` or `.`.
///
/// The constructor rejects anything else, so an operand built from digits
/// can only ever contain ASCII digits and decimal points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point.
    pub const POINT: Digit = Digit('.');
    /// Zero, which is ignored when the operand is already `"0"`.
    pub const ZERO: Digit = Digit('0');

    /// Create a digit from a character.
    pub fn new(c: char) -> Result<Self, InputError> {
        match c {
            '0'..='9' | '.' => Ok(Digit(c)),
            other => Err(InputError::InvalidDigit(other)),
        }
    }

    /// Compile-time constructor for fixed key tables.
    pub(crate) const fn literal(c: char) -> Self {
        assert!(matches!(c, '0'..='9' | '.'), "digit literal out of range");
        Digit(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::new(c)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input events dispatched to the reducer.
///
/// Payloads are typed, so the input contract (digits, `.`, and the four
/// operators) is enforced when an event is constructed rather than when it
/// is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Event {
    /// Append a digit or decimal point to the current operand.
    AddDigit(Digit),
    /// Pick the pending operator, folding any complete expression first.
    ChooseOperation(Operation),
    /// Reset to the empty state.
    Clear,
    /// Remove the last character of the current operand.
    DeleteDigit,
    /// Compute `previous operation current`.
    Evaluate,
}

impl Event {
    /// Kebab-case name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "add-digit",
            Self::ChooseOperation(_) => "choose-operation",
            Self::Clear => "clear",
            Self::DeleteDigit => "delete-digit",
            Self::Evaluate => "evaluate",
        }
    }

    /// Shorthand for `Event::AddDigit` from a raw character.
    pub fn digit(c: char) -> Result<Self, InputError> {
        Digit::new(c).map(Event::AddDigit)
    }

    /// Shorthand for `Event::ChooseOperation` from a raw symbol.
    pub fn operation(symbol: char) -> Result<Self, InputError> {
        Operation::try_from(symbol).map(Event::ChooseOperation)
    }
}
