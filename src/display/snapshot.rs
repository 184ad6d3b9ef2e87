//! Formatted view of a calculator state.

use crate::core::{format_operand, CalculatorState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three strings a presentation layer renders.
///
/// Anomalous results (`NaN`, `∞`, the `NaN` left by an empty operand) are
/// passed through verbatim.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculatorState, Operation};
/// use keypad_calc::display::DisplaySnapshot;
///
/// let state = CalculatorState {
///     previous_operand: Some("1234".to_string()),
///     operation: Some(Operation::Multiply),
///     ..CalculatorState::default()
/// };
///
/// let display = DisplaySnapshot::from(&state);
/// assert_eq!(display.formatted_previous_operand, "1,234");
/// assert_eq!(display.operation, "*");
/// assert_eq!(display.formatted_current_operand, "0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    /// Formatted previous operand, or empty.
    pub formatted_previous_operand: String,
    /// Pending operator symbol, or empty.
    pub operation: String,
    /// Formatted current operand, `"0"` when nothing is entered.
    pub formatted_current_operand: String,
}

impl DisplaySnapshot {
    /// The upper (history) line: previous operand and operator.
    pub fn upper_line(&self) -> String {
        format!("{} {}", self.formatted_previous_operand, self.operation)
    }

    /// The lower (main) line.
    pub fn lower_line(&self) -> &str {
        &self.formatted_current_operand
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&CalculatorState> for DisplaySnapshot {
    fn from(state: &CalculatorState) -> Self {
        Self {
            formatted_previous_operand: format_operand(state.previous_operand.as_deref())
                .unwrap_or_default(),
            operation: state
                .operation
                .map(|operation| operation.to_string())
                .unwrap_or_default(),
            formatted_current_operand: format_operand(state.current_operand.as_deref())
                .unwrap_or_else(|| "0".to_string()),
        }
    }
}

impl fmt::Display for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.upper_line())?;
        write!(f, "{}", self.lower_line())
    }
}
