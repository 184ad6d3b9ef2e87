//! Display contract exposed to presentation layers.
//!
//! Presentation layers never read `CalculatorState` fields directly for
//! rendering. They take a [`DisplaySnapshot`], which carries the formatted
//! strings and nothing else.

mod snapshot;

pub use snapshot::DisplaySnapshot;
