//! TUI pane rendering modules
//!
//! Each pane is a stateless render function that draws from borrowed state.
//!
//! # Pane Modules
//!
//! - [`display`]: the calculator screen with the memory row
//! - [`keypad`]: the button grid with the cursor highlight
//! - [`status`]: status bar with keybindings and the pending operator

pub mod display;
pub mod keypad;
pub mod status;

// Re-export render functions for convenience
pub use display::render_display_pane;
pub use keypad::render_keypad_pane;
pub use status::render_status_bar;
