//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The `CalculatorState` value and its `Event`s
//! - The `transition` reducer and `evaluate` helper
//! - Number parsing, stringification and display formatting
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod event;
mod format;
mod number;
mod operation;
mod reducer;
mod state;

pub use event::{Digit, Event};
pub use format::{format_integer, format_operand};
pub use number::{number_to_string, parse_float};
pub use operation::Operation;
pub use reducer::{evaluate, transition};
pub use state::{CalculatorState, Phase};
