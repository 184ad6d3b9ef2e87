//! Keys of the calculator keypad and their grid layout.

use super::error::InputError;
use crate::core::{Digit, Event, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A button on the keypad.
///
/// Keys carry no logic of their own: each maps to exactly one [`Event`].
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Event;
/// use keypad_calc::keypad::Key;
///
/// let key = Key::from_label("AC").unwrap();
/// assert_eq!(key, Key::AllClear);
/// assert_eq!(key.event(), Event::Clear);
/// assert_eq!(Key::Equals.label(), "=");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    AllClear,
    Delete,
    Digit(Digit),
    Operation(Operation),
    Equals,
}

impl Key {
    const fn digit(c: char) -> Self {
        Key::Digit(Digit::literal(c))
    }

    /// The text printed on the button.
    pub fn label(&self) -> String {
        match self {
            Self::AllClear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Digit(digit) => digit.to_string(),
            Self::Operation(operation) => operation.to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// The event emitted when the button is pressed.
    pub fn event(&self) -> Event {
        match *self {
            Self::AllClear => Event::Clear,
            Self::Delete => Event::DeleteDigit,
            Self::Digit(digit) => Event::AddDigit(digit),
            Self::Operation(operation) => Event::ChooseOperation(operation),
            Self::Equals => Event::Evaluate,
        }
    }

    /// Look a key up by its button label.
    pub fn from_label(label: &str) -> Result<Self, InputError> {
        let unknown = || InputError::UnknownLabel(label.to_string());

        match label {
            "AC" => Ok(Self::AllClear),
            "DEL" => Ok(Self::Delete),
            "=" => Ok(Self::Equals),
            _ => {
                let mut chars = label.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(unknown());
                };
                Digit::new(c)
                    .map(Self::Digit)
                    .or_else(|_| Operation::try_from(c).map(Self::Operation))
                    .map_err(|_| unknown())
            }
        }
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        key.event()
    }
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A key placed on the grid, spanning one or more columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeypadCell {
    pub key: Key,
    pub span: u8,
}

impl KeypadCell {
    const fn single(key: Key) -> Self {
        Self { key, span: 1 }
    }

    const fn wide(key: Key) -> Self {
        Self { key, span: 2 }
    }
}

/// Number of columns in the keypad grid.
pub const KEYPAD_COLUMNS: u8 = 4;

/// Rows of the keypad, top to bottom.
pub static KEYPAD_LAYOUT: [&[KeypadCell]; 5] = [
    &[
        KeypadCell::wide(Key::AllClear),
        KeypadCell::single(Key::Delete),
        KeypadCell::single(Key::Operation(Operation::Divide)),
    ],
    &[
        KeypadCell::single(Key::digit('7')),
        KeypadCell::single(Key::digit('8')),
        KeypadCell::single(Key::digit('9')),
        KeypadCell::single(Key::Operation(Operation::Multiply)),
    ],
    &[
        KeypadCell::single(Key::digit('4')),
        KeypadCell::single(Key::digit('5')),
        KeypadCell::single(Key::digit('6')),
        KeypadCell::single(Key::Operation(Operation::Subtract)),
    ],
    &[
        KeypadCell::single(Key::digit('1')),
        KeypadCell::single(Key::digit('2')),
        KeypadCell::single(Key::digit('3')),
        KeypadCell::single(Key::Operation(Operation::Add)),
    ],
    &[
        KeypadCell::single(Key::digit('.')),
        KeypadCell::single(Key::digit('0')),
        KeypadCell::wide(Key::Equals),
    ],
];

/// Every key on the keypad in layout order.
pub fn keypad_keys() -> impl Iterator<Item = Key> {
    KEYPAD_LAYOUT
        .iter()
        .flat_map(|row| row.iter().map(|cell| cell.key))
}
