//! Imperative shell around the pure reducer.
//!
//! The core never holds state; this module does. A [`Calculator`] owns the
//! single current `CalculatorState`, feeds events through
//! [`transition`](crate::core::transition) one at a time, and notifies a
//! [`Render`] implementation after each one.

mod calculator;
mod render;

pub use calculator::Calculator;
pub use render::{RecordingRenderer, Render};
