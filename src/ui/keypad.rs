//! Keypad layout and key accelerators
//!
//! The keypad is built from [`TEMPLATE`], a grid of button labels. Every label
//! doubles as a keyboard accelerator: typing a key whose text matches a label
//! (ignoring case) presses that button. Labels longer than one character, such
//! as `M+`, can only be reached with the cursor or by name in a key sequence.

use crate::arithmetic::Operator;
use crate::controller::Event;
use crate::error::{CalcError, Result};
use rustc_hash::FxHashMap;

/// Button labels, top row first
pub const TEMPLATE: &[&[&str]] = &[
    &["M+", "M-", "M", "MC"],
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "C", "+"],
    &["="],
];

/// Visual grouping of buttons, used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Clear,
    Equals,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub event: Event,
    pub kind: ButtonKind,
}

impl Button {
    /// Resolve a template label into a button
    fn from_label(label: &'static str) -> Option<Self> {
        let (event, kind) = match label {
            "." => (Event::DecimalPoint, ButtonKind::Digit),
            "=" => (Event::Equals, ButtonKind::Equals),
            "C" => (Event::Clear, ButtonKind::Clear),
            "M" => (Event::MemorySet, ButtonKind::Memory),
            "M+" => (Event::MemoryAdd, ButtonKind::Memory),
            "M-" => (Event::MemorySubtract, ButtonKind::Memory),
            "MC" => (Event::MemoryClear, ButtonKind::Memory),
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    (Event::Operator(op), ButtonKind::Operator)
                } else {
                    let mut chars = label.chars();
                    let digit = chars.next().and_then(|c| c.to_digit(10));
                    match (digit, chars.next()) {
                        (Some(d), None) => (Event::digit(d)?, ButtonKind::Digit),
                        _ => return None,
                    }
                }
            }
        };
        Some(Button { label, event, kind })
    }
}

/// Grid position as `(row, column)`
pub type Position = (usize, usize);

#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
    /// Lowercased label -> position
    accelerators: FxHashMap<String, Position>,
    cursor: Position,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        let mut rows = Vec::with_capacity(TEMPLATE.len());
        let mut accelerators = FxHashMap::default();

        for (r, labels) in TEMPLATE.iter().enumerate() {
            let mut row = Vec::with_capacity(labels.len());
            for label in labels.iter().copied() {
                match Button::from_label(label) {
                    Some(button) => {
                        accelerators.insert(label.to_lowercase(), (r, row.len()));
                        row.push(button);
                    }
                    None => tracing::warn!(label, "keypad label has no action"),
                }
            }
            rows.push(row);
        }

        Keypad {
            rows,
            accelerators,
            cursor: (0, 0),
        }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn get(&self, (row, col): Position) -> Option<&Button> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Find a button position by label, ignoring case
    pub fn position_of(&self, label: &str) -> Option<Position> {
        self.accelerators.get(&label.to_lowercase()).copied()
    }

    /// Find a button by label, ignoring case
    pub fn lookup(&self, label: &str) -> Option<&Button> {
        self.position_of(label).and_then(|pos| self.get(pos))
    }

    /// Button pressed by typing `key`, if any
    pub fn accelerator(&self, key: char) -> Option<Position> {
        let mut buf = [0u8; 4];
        self.position_of(key.encode_utf8(&mut buf))
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn move_up(&mut self) {
        if self.cursor.0 > 0 {
            self.set_row(self.cursor.0 - 1);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.0 + 1 < self.rows.len() {
            self.set_row(self.cursor.0 + 1);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor.1 = self.cursor.1.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.rows[self.cursor.0].len();
        if self.cursor.1 + 1 < len {
            self.cursor.1 += 1;
        }
    }

    /// Change row, clamping the column to the new row's width
    fn set_row(&mut self, row: usize) {
        let len = self.rows[row].len();
        self.cursor = (row, self.cursor.1.min(len.saturating_sub(1)));
    }

    /// Translate a key sequence into events.
    ///
    /// Each whitespace-separated token is either a whole label (`M+`) or a run
    /// of single-character labels (`12+3=`).
    pub fn parse_sequence(&self, sequence: &str) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        for token in sequence.split_whitespace() {
            if let Some(button) = self.lookup(token) {
                events.push(button.event);
                continue;
            }
            for key in token.chars() {
                let button = self
                    .accelerator(key)
                    .and_then(|pos| self.get(pos))
                    .ok_or_else(|| CalcError::UnknownKey(key.to_string()))?;
                events.push(button.event);
            }
        }
        Ok(events)
    }
}
