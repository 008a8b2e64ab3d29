//! Calculator state machine
//!
//! This module maps input [`Event`]s onto [`SessionState`] transitions:
//! - [`event`]: the closed set of inputs
//! - [`display`]: the display value and number formatting
//! - [`state`]: session state and the per-event updates
//!
//! # Transition Model
//!
//! [`transition`] is a pure function from `(state, event)` to
//! `(new state, rendered output)`. [`Controller`] owns one state and threads
//! it through `transition` for the event loop.
//!
//! Operand capture is lazy: pressing an operator only records it as pending.
//! The display is moved into the stacked operand when the next digit arrives,
//! at which point the pending operator becomes the one used by equals.

pub mod display;
pub mod event;
pub mod state;

pub use display::{format_number, DisplayValue, DIVIDE_BY_ZERO_MESSAGE};
pub use event::Event;
pub use state::{Rendered, SessionState, DEFAULT_MAX_INPUT_LEN};

/// Apply one event to the session state
pub fn transition(mut state: SessionState, event: Event) -> (SessionState, Rendered) {
    match event {
        Event::Digit(d) => match char::from_digit(u32::from(d), 10) {
            Some(ch) => state.enter(ch),
            None => tracing::warn!(digit = d, "digit out of range"),
        },
        Event::DecimalPoint => state.enter('.'),
        Event::Operator(op) => state.select_operator(op),
        Event::Equals => state.evaluate(),
        Event::Clear => state.clear(),
        Event::MemorySet => state.memory_set(),
        Event::MemoryAdd => state.memory_add(),
        Event::MemorySubtract => state.memory_subtract(),
        Event::MemoryClear => state.memory_clear(),
    }

    let rendered = state.render();
    tracing::trace!(?event, display = %rendered.display, memory = %rendered.memory, "transition");
    (state, rendered)
}

/// Owns the session state for the lifetime of the app
#[derive(Debug, Default)]
pub struct Controller {
    state: SessionState,
}

impl Controller {
    pub fn new(max_input_len: usize) -> Self {
        Controller {
            state: SessionState::new(max_input_len),
        }
    }

    /// Handle one event to completion and return what should be shown
    pub fn dispatch(&mut self, event: Event) -> Rendered {
        let state = std::mem::take(&mut self.state);
        let (next, rendered) = transition(state, event);
        self.state = next;
        rendered
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn render(&self) -> Rendered {
        self.state.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Operator;

    #[test]
    fn test_transition_is_pure() {
        let start = SessionState::default();
        let (a, ra) = transition(start.clone(), Event::Digit(4));
        let (b, rb) = transition(start, Event::Digit(4));
        assert_eq!(a, b);
        assert_eq!(ra, rb);
        assert_eq!(ra.display, "4");
    }

    #[test]
    fn test_operator_capture_is_lazy() {
        let mut controller = Controller::default();
        controller.dispatch(Event::Digit(6));
        controller.dispatch(Event::Operator(Operator::Multiply));

        let state = controller.state();
        assert_eq!(state.pending_operator, Some(Operator::Multiply));
        assert_eq!(state.last_operator, None);
        assert_eq!(state.stacked_operand, 0.0);

        controller.dispatch(Event::Digit(2));
        let state = controller.state();
        assert_eq!(state.pending_operator, None);
        assert_eq!(state.last_operator, Some(Operator::Multiply));
        assert_eq!(state.stacked_operand, 6.0);
        assert_eq!(controller.render().display, "2");
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut controller = Controller::default();
        let rendered = controller.dispatch(Event::Digit(12));
        assert_eq!(rendered.display, "0");
    }
}
