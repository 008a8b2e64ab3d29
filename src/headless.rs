//! Non-interactive runs over a key sequence

use crate::controller::{Controller, Rendered, SessionState};
use crate::error::Result;
use crate::ui::Keypad;
use serde::Serialize;

/// Final output of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub rendered: Rendered,
    pub state: SessionState,
}

/// Press every key in `sequence` and report where the calculator ends up.
///
/// See [`Keypad::parse_sequence`] for the sequence syntax. An unknown key
/// fails the run before any key is pressed.
pub fn run(sequence: &str, max_input_len: usize) -> Result<Report> {
    let keypad = Keypad::new();
    let events = keypad.parse_sequence(sequence)?;

    let mut controller = Controller::new(max_input_len);
    let mut rendered = controller.render();
    for event in events {
        rendered = controller.dispatch(event);
    }

    Ok(Report {
        rendered,
        state: controller.state().clone(),
    })
}

impl Report {
    /// Pretty-printed JSON for `--json` output
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
