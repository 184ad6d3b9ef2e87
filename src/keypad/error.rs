//! Input conversion errors.

use thiserror::Error;

/// Errors raised when raw characters or key labels are converted into
/// typed calculator input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    #[error("'{0}' is not one of +, -, *, ÷")]
    UnknownOperation(String),

    #[error("Unknown key label '{0}'")]
    UnknownLabel(String),

    #[error("Unknown key '{label}' at position {position}")]
    UnknownKey { label: String, position: usize },
}
