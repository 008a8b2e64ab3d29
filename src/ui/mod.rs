//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, keypad cursor
//! - **[`keypad`]** — button layout and the label-keyed accelerator table
//! - **[`panes`]** — stateless render functions for the screen, keypad and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Controller`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::controller::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod keypad;
pub mod panes;
pub mod theme;

pub use app::App;
pub use keypad::Keypad;
