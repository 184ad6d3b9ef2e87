//! Validation-based invariant enforcement for calculator states.
//!
//! The reducer never produces an invalid state, but states also arrive from
//! outside: deserialized snapshots, hand-built fixtures, builder input.
//! This module checks them with Stillwater's `Validation` type, which
//! accumulates ALL violations instead of failing fast.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::core::CalculatorState;
//! use keypad_calc::enforcement::enforce;
//!
//! let state = CalculatorState::with_current("42");
//! assert!(enforce(&state).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{enforce, is_well_formed_operand};
pub use violations::{OperandField, StateViolation};
