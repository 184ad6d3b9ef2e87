//! Builder API for configuring calculator sessions.
//!
//! A session is configured by its starting state. The builder checks that
//! state against every invariant before handing out a
//! [`Calculator`](crate::machine::Calculator).

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
