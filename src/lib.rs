//! Keypad Calc: a pure functional four-function calculator
//!
//! Keypad Calc follows the "pure core, imperative shell" philosophy.
//! The calculator logic is a single pure function from a state and an event
//! to the next state, while ownership of the live state, logging, and
//! rendering live in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds previous operand, operator, current
//!   operand and the overwrite flag
//! - **Events**: five typed `Event`s (add digit, choose operation, clear,
//!   delete digit, evaluate)
//! - **Reducer**: `transition` folds events into states; invalid events are
//!   absorbed as no-ops, never raised as errors
//! - **Display**: `DisplaySnapshot` is the formatted view a presentation
//!   layer renders
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::core::{transition, CalculatorState, Event, Operation};
//! use keypad_calc::display::DisplaySnapshot;
//!
//! let state = [
//!     Event::digit('5').unwrap(),
//!     Event::ChooseOperation(Operation::Divide),
//!     Event::digit('0').unwrap(),
//!     Event::Evaluate,
//! ]
//! .into_iter()
//! .fold(CalculatorState::default(), transition);
//!
//! assert_eq!(state.current_operand.as_deref(), Some("Infinity"));
//! assert_eq!(DisplaySnapshot::from(&state).formatted_current_operand, "∞");
//! ```

pub mod builder;
pub mod core;
pub mod display;
pub mod enforcement;
pub mod keypad;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use crate::core::{transition, CalculatorState, Event, Operation};
pub use display::DisplaySnapshot;
pub use keypad::{InputError, Key};
pub use machine::{Calculator, Render};
