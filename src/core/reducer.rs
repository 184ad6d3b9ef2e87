//! The pure state-transition function.
//!
//! `transition` maps the current state and one event to the next state.
//! Events whose preconditions do not hold are absorbed: the input state is
//! returned unchanged. Nothing here can fail.

use super::event::{Digit, Event};
use super::number::{number_to_string, parse_float};
use super::operation::Operation;
use super::state::CalculatorState;

/// Compute the next state.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{transition, CalculatorState, Event, Operation};
///
/// let events = [
///     Event::digit('2').unwrap(),
///     Event::ChooseOperation(Operation::Add),
///     Event::digit('3').unwrap(),
///     Event::ChooseOperation(Operation::Multiply),
///     Event::digit('4').unwrap(),
///     Event::Evaluate,
/// ];
///
/// let state = events
///     .into_iter()
///     .fold(CalculatorState::default(), transition);
///
/// assert_eq!(state.current_operand.as_deref(), Some("20"));
/// assert!(state.overwrite);
/// ```
pub fn transition(state: CalculatorState, event: Event) -> CalculatorState {
    match event {
        Event::AddDigit(digit) => add_digit(state, digit),
        Event::ChooseOperation(operation) => choose_operation(state, operation),
        Event::Clear => CalculatorState::default(),
        Event::DeleteDigit => delete_digit(state),
        Event::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state
        };
    }

    let current = state.current_operand.as_deref();
    if digit == Digit::ZERO && current == Some("0") {
        return state;
    }
    if digit.is_point() && current.is_some_and(|c| c.contains('.')) {
        return state;
    }

    let mut operand = state.current_operand.unwrap_or_default();
    operand.push(digit.as_char());
    CalculatorState {
        current_operand: Some(operand),
        ..state
    }
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    match (state.current_operand.is_some(), state.previous_operand.is_some()) {
        (false, false) => state,
        (false, true) => CalculatorState {
            operation: Some(operation),
            ..state
        },
        (true, false) => CalculatorState {
            previous_operand: state.current_operand,
            operation: Some(operation),
            current_operand: None,
            overwrite: state.overwrite,
        },
        (true, true) => CalculatorState {
            previous_operand: Some(evaluate(&state)),
            operation: Some(operation),
            current_operand: None,
            overwrite: state.overwrite,
        },
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            overwrite: false,
            current_operand: None,
            ..state
        };
    }

    let current_operand = match state.current_operand.as_deref() {
        None => return state,
        Some(operand) if operand.chars().count() == 1 => None,
        Some(operand) => {
            let mut trimmed = operand.to_string();
            trimmed.pop();
            Some(trimmed)
        }
    };

    CalculatorState {
        current_operand,
        ..state
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state;
    }

    CalculatorState {
        current_operand: Some(evaluate(&state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

/// Evaluate `previous operation current` to its stored string form.
///
/// Absent operands read as the empty string. If either side does not parse
/// to a number the result is `""`; otherwise the result is rendered with
/// [`number_to_string`], so division by zero yields `"Infinity"`,
/// `"-Infinity"` or `"NaN"`. Without a pending operator the result is `"0"`.
///
/// ```rust
/// use keypad_calc::core::{evaluate, CalculatorState, Operation};
///
/// let state = CalculatorState {
///     previous_operand: Some("5".to_string()),
///     operation: Some(Operation::Divide),
///     current_operand: Some("0".to_string()),
///     overwrite: false,
/// };
/// assert_eq!(evaluate(&state), "Infinity");
/// ```
pub fn evaluate(state: &CalculatorState) -> String {
    let previous = parse_float(state.previous_operand.as_deref().unwrap_or_default());
    let current = parse_float(state.current_operand.as_deref().unwrap_or_default());
    if previous.is_nan() || current.is_nan() {
        return String::new();
    }

    let computation = state
        .operation
        .map_or(0.0, |operation| operation.apply(previous, current));
    number_to_string(computation)
}
