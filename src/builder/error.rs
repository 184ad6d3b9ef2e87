//! Build errors for the calculator builder.

use crate::enforcement::StateViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state violates {} invariant(s): {}", .violations.len(), summarize(.violations))]
    InvalidInitialState { violations: Vec<StateViolation> },
}

fn summarize(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
