//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::core::CalculatorState;
use crate::enforcement::enforce;
use crate::machine::Calculator;
use stillwater::validation::Validation;
use tracing::warn;

/// Builder for constructing calculator sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use keypad_calc::builder::CalculatorBuilder;
/// use keypad_calc::core::CalculatorState;
///
/// let calculator = CalculatorBuilder::new()
///     .initial(CalculatorState::with_current("3.5"))
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.display().formatted_current_operand, "3.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    initial: Option<CalculatorState>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (optional, defaults to the empty state).
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the calculator.
    /// Returns an error listing every violated invariant of the initial state.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let initial = self.initial.unwrap_or_default();

        match enforce(&initial) {
            Validation::Success(_) => Ok(Calculator::from_state(initial)),
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                warn!(
                    violations = violations.len(),
                    "Rejected initial calculator state"
                );
                Err(BuildError::InvalidInitialState { violations })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, Operation, Phase};
    use crate::enforcement::StateViolation;

    #[test]
    fn builder_defaults_to_empty_state() {
        let calculator = CalculatorBuilder::new().build().unwrap();
        assert!(calculator.state().is_empty());
    }

    #[test]
    fn builder_resumes_from_valid_state() {
        let state = CalculatorState {
            previous_operand: Some("10".to_string()),
            operation: Some(Operation::Multiply),
            current_operand: Some("4".to_string()),
            overwrite: false,
        };

        let mut calculator = CalculatorBuilder::new().initial(state).build().unwrap();
        assert_eq!(calculator.phase(), Phase::Pending);

        calculator.dispatch(Event::Evaluate);
        assert_eq!(calculator.state().current_operand.as_deref(), Some("40"));
    }

    #[test]
    fn builder_rejects_invalid_state_with_all_violations() {
        let state = CalculatorState {
            current_operand: Some("1.2.3".to_string()),
            operation: Some(Operation::Add),
            ..CalculatorState::default()
        };

        let err = CalculatorBuilder::new().initial(state).build().unwrap_err();
        let BuildError::InvalidInitialState { violations } = &err;
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| matches!(v, StateViolation::OperationWithoutPreviousOperand)));
        assert!(err.to_string().starts_with("Initial state violates 2 invariant(s)"));
    }
}
