//! Session shell that owns the calculator state.

use super::render::Render;
use crate::core::{transition, CalculatorState, Event, Phase};
use crate::display::DisplaySnapshot;
use crate::keypad::Key;
use tracing::{debug, trace};

/// A running calculator session.
///
/// The session is the only owner of the current state. Each dispatched
/// event replaces it wholesale with the reducer's output; callers only ever
/// see the new state.
///
/// # Example
///
/// ```rust
/// use keypad_calc::keypad::parse_keys;
/// use keypad_calc::keypad::IntoResult;
/// use keypad_calc::machine::Calculator;
///
/// let mut calculator = Calculator::new();
/// let keys = parse_keys("1 2 0 0 * 3 =").into_result().unwrap();
/// calculator.press_all(keys);
///
/// assert_eq!(calculator.display().formatted_current_operand, "3,600");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    dispatched: usize,
}

impl Calculator {
    /// Create a session in the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session starting from an existing state.
    ///
    /// The state is not checked; use
    /// [`CalculatorBuilder`](crate::builder::CalculatorBuilder) to validate
    /// states from untrusted sources.
    pub(crate) fn from_state(state: CalculatorState) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    /// Current state (pure).
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current phase (pure).
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Formatted display of the current state (pure).
    pub fn display(&self) -> DisplaySnapshot {
        DisplaySnapshot::from(&self.state)
    }

    /// Number of events dispatched since the session started.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Apply one event and return the new state.
    pub fn dispatch(&mut self, event: Event) -> &CalculatorState {
        let previous = std::mem::take(&mut self.state);
        let from = previous.phase();
        let unchanged = previous.clone();
        let next = transition(previous, event);
        self.dispatched += 1;

        if next == unchanged {
            trace!(event = event.kind(), phase = %from, "Event absorbed without change");
        } else {
            debug!(
                event = event.kind(),
                from = %from,
                to = %next.phase(),
                current = next.current_operand.as_deref().unwrap_or(""),
                "Applied transition"
            );
        }

        self.state = next;
        &self.state
    }

    /// Press a keypad key.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        self.dispatch(key.event())
    }

    /// Press keys in order, returning the final state.
    pub fn press_all<I>(&mut self, keys: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.dispatch(key.event());
        }
        &self.state
    }

    /// Apply one event, then hand the new display to the renderer.
    pub fn dispatch_and_render<R>(&mut self, event: Event, renderer: &mut R) -> &CalculatorState
    where
        R: Render + ?Sized,
    {
        self.dispatch(event);
        renderer.render(&self.display());
        &self.state
    }
}
