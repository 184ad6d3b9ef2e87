//! Calculator state value.
//!
//! A `CalculatorState` is an immutable snapshot of everything the keypad has
//! entered so far. The reducer consumes one and returns the next; nothing
//! is mutated in place.

use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The running two-operand expression.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculatorState, Operation, Phase};
///
/// let state = CalculatorState {
///     previous_operand: Some("12".to_string()),
///     operation: Some(Operation::Add),
///     ..CalculatorState::default()
/// };
///
/// assert_eq!(state.phase(), Phase::Pending);
/// assert_eq!(CalculatorState::default().phase(), Phase::Empty);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// The operand being typed, or the last computed result.
    pub current_operand: Option<String>,
    /// The left-hand operand captured when an operator was chosen.
    pub previous_operand: Option<String>,
    /// The pending operator.
    pub operation: Option<Operation>,
    /// Set after an evaluation: the next digit replaces the current operand.
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state. Equivalent to `CalculatorState::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state holding only a current operand, as if it had been typed.
    pub fn with_current(operand: impl Into<String>) -> Self {
        Self {
            current_operand: Some(operand.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Classify the state for logging and diagnostics.
    pub fn phase(&self) -> Phase {
        if self.overwrite {
            Phase::Result
        } else if self.operation.is_some() || self.previous_operand.is_some() {
            Phase::Pending
        } else if self.current_operand.is_some() {
            Phase::Entering
        } else {
            Phase::Empty
        }
    }

    /// Whether the current operand holds an anomalous result (`NaN`, an
    /// infinity, or the empty string left by an unparsable operand).
    pub fn shows_anomaly(&self) -> bool {
        matches!(
            self.current_operand.as_deref(),
            Some("" | "NaN" | "Infinity" | "-Infinity")
        )
    }
}

/// Coarse position of a state in the input cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered.
    Empty,
    /// Typing the first operand.
    Entering,
    /// An operator is pending; typing (or about to type) the second operand.
    Pending,
    /// A result is shown and the next digit starts a fresh operand.
    Result,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Result => "Result",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
