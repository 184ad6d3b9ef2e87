//! Invariant checks over calculator states using Validation.

use super::violations::{OperandField, StateViolation};
use crate::core::{number_to_string, parse_float, CalculatorState};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every state invariant, accumulating ALL violations.
///
/// Returns `Validation::Success(())` for any state the reducer can reach
/// from the empty state.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculatorState, Operation};
/// use keypad_calc::enforcement::enforce;
///
/// assert!(enforce(&CalculatorState::with_current("12.5")).is_success());
///
/// let broken = CalculatorState {
///     current_operand: Some("1.2.3".to_string()),
///     operation: Some(Operation::Add),
///     ..CalculatorState::default()
/// };
/// assert!(enforce(&broken).is_failure());
/// ```
pub fn enforce(state: &CalculatorState) -> Validation<(), NonEmptyVec<StateViolation>> {
    let checks = vec![
        check_operand(OperandField::Current, state.current_operand.as_deref()),
        check_operand(OperandField::Previous, state.previous_operand.as_deref()),
        check_pairing(state),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_operand(
    field: OperandField,
    operand: Option<&str>,
) -> Validation<(), NonEmptyVec<StateViolation>> {
    match operand {
        Some(value) if !is_well_formed_operand(value) => {
            Validation::fail(StateViolation::MalformedOperand {
                field,
                value: value.to_string(),
            })
        }
        _ => Validation::success(()),
    }
}

fn check_pairing(state: &CalculatorState) -> Validation<(), NonEmptyVec<StateViolation>> {
    match (&state.previous_operand, &state.operation) {
        (None, Some(_)) => Validation::fail(StateViolation::OperationWithoutPreviousOperand),
        (Some(_), None) => Validation::fail(StateViolation::PreviousOperandWithoutOperation),
        _ => Validation::success(()),
    }
}

/// Whether an operand string could have been produced by the keypad.
///
/// Typed operands are ASCII digits with at most one decimal point. Computed
/// operands are the empty string (an unparsable input) or the canonical
/// rendering of an `f64`, such as `"-5"`, `"Infinity"` or `"1e+21"`.
pub fn is_well_formed_operand(operand: &str) -> bool {
    is_typed_operand(operand) || is_computed_operand(operand)
}

fn is_typed_operand(operand: &str) -> bool {
    !operand.is_empty()
        && operand.chars().all(|c| c.is_ascii_digit() || c == '.')
        && operand.matches('.').count() <= 1
}

fn is_computed_operand(operand: &str) -> bool {
    operand.is_empty() || number_to_string(parse_float(operand)) == operand
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn typed_operands_are_well_formed() {
        for operand in ["0", "007", "12.", ".5", "3.14159"] {
            assert!(is_well_formed_operand(operand), "{operand}");
        }
    }

    #[test]
    fn computed_operands_are_well_formed() {
        for operand in ["", "-5", "NaN", "Infinity", "-Infinity", "1e+21", "-2.5e-8"] {
            assert!(is_well_formed_operand(operand), "{operand}");
        }
    }

    #[test]
    fn malformed_operands_are_rejected() {
        for operand in ["1.2.3", "abc", "-", "1,000", "+5", "1e21", " 4"] {
            assert!(!is_well_formed_operand(operand), "{operand}");
        }
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let state = CalculatorState {
            current_operand: Some("x".to_string()),
            previous_operand: Some("1..".to_string()),
            operation: None,
            overwrite: false,
        };

        match enforce(&state) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let malformed = errors
                    .iter()
                    .filter(|e| matches!(e, StateViolation::MalformedOperand { .. }))
                    .count();
                let unpaired = errors
                    .iter()
                    .any(|e| matches!(e, StateViolation::PreviousOperandWithoutOperation));

                assert_eq!(malformed, 2);
                assert!(unpaired);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn operation_requires_previous_operand() {
        let state = CalculatorState {
            operation: Some(Operation::Add),
            ..CalculatorState::default()
        };

        let result = enforce(&state);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, StateViolation::OperationWithoutPreviousOperand)));
        }
    }

    #[test]
    fn enforcement_succeeds_for_valid_states() {
        let states = [
            CalculatorState::default(),
            CalculatorState::with_current("0."),
            CalculatorState {
                previous_operand: Some("Infinity".to_string()),
                operation: Some(Operation::Subtract),
                current_operand: Some("4".to_string()),
                overwrite: true,
            },
        ];
        for state in states {
            assert!(enforce(&state).is_success());
        }
    }

    #[test]
    fn violation_messages_name_the_field() {
        let violation = StateViolation::MalformedOperand {
            field: OperandField::Previous,
            value: "1.2.3".to_string(),
        };
        assert_eq!(violation.to_string(), "Malformed previous operand: \"1.2.3\"");
    }
}
