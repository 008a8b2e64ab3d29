//! # Introduction
//!
//! calctty is a four-function keypad calculator with a single memory
//! register, driven from the terminal through a [ratatui](https://docs.rs/ratatui)
//! UI or headlessly from a key sequence.
//!
//! ## Event pipeline
//!
//! ```text
//! Key / keypad button → Event → transition(state, event) → Rendered → TUI
//! ```
//!
//! 1. [`ui::keypad`] — resolves keys and buttons to [`controller::Event`]s
//!    through a label-keyed accelerator table.
//! 2. [`controller`] — the state machine: pending operator, stacked operand,
//!    display entry, memory register.
//! 3. [`arithmetic`] — pure binary operators and memory register updates.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Ambient pieces: [`config`] (TOML settings), [`logging`] (tracing to a
//! file), [`error`] (infrastructure errors), [`headless`] (scripted runs).
//!
//! ## Supported keys
//!
//! Digits, `.`, `+ - * /`, `=`, `C` (clear entry), and the memory keys
//! `M` (store), `M+`, `M-`, `MC`. There is no operator precedence: each
//! equals applies one operator to two operands.

pub mod arithmetic;
pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
pub mod logging;
pub mod ui;
