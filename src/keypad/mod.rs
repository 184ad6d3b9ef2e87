//! Keypad input surface.
//!
//! The keypad holds no calculator logic. It names the buttons, lays them
//! out on a four-column grid, and turns button labels (or recorded tapes of
//! labels) into the events the reducer understands.

mod error;
mod key;
mod tape;

pub use error::InputError;
pub use key::{keypad_keys, Key, KeypadCell, KEYPAD_COLUMNS, KEYPAD_LAYOUT};
pub use tape::{parse_keys, IntoResult};
