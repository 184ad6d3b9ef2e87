//! Key tapes: recorded key sequences written as whitespace-separated labels.
//!
//! A tape such as `"1 2 + 3 ="` replays a session. Parsing accumulates
//! every unknown label instead of stopping at the first one, so a bad tape
//! is reported in a single pass.

use super::error::InputError;
use super::key::Key;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Parse a tape into keys, collecting ALL unknown labels.
///
/// Positions in the reported errors are zero-based label indices.
///
/// # Example
///
/// ```rust
/// use keypad_calc::keypad::{parse_keys, IntoResult, Key};
///
/// let keys = parse_keys("AC 7 * 6 =").into_result().unwrap();
/// assert_eq!(keys.first(), Some(&Key::AllClear));
/// assert_eq!(keys.len(), 5);
/// ```
pub fn parse_keys(tape: &str) -> Validation<Vec<Key>, NonEmptyVec<InputError>> {
    let checks: Vec<Validation<Key, NonEmptyVec<InputError>>> = tape
        .split_whitespace()
        .enumerate()
        .map(|(position, label)| match Key::from_label(label) {
            Ok(key) => Validation::success(key),
            Err(InputError::UnknownLabel(label)) => {
                Validation::fail(InputError::UnknownKey { label, position })
            }
            Err(other) => Validation::fail(other),
        })
        .collect();

    Validation::all_vec(checks)
}

/// Conversion of a tape validation into a plain `Result`.
pub trait IntoResult<T> {
    fn into_result(self) -> Result<T, Vec<InputError>>;
}

impl<T> IntoResult<T> for Validation<T, NonEmptyVec<InputError>> {
    fn into_result(self) -> Result<T, Vec<InputError>> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}
