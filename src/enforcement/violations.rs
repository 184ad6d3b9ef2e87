//! Invariant violations reported for calculator states.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which operand slot a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandField {
    Current,
    Previous,
}

impl fmt::Display for OperandField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current operand"),
            Self::Previous => f.write_str("previous operand"),
        }
    }
}

/// A broken calculator-state invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("Malformed {field}: {value:?}")]
    MalformedOperand { field: OperandField, value: String },

    #[error("Operation is set but there is no previous operand")]
    OperationWithoutPreviousOperand,

    #[error("Previous operand is set but there is no operation")]
    PreviousOperandWithoutOperation,
}
