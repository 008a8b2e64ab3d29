//! Session state owned by the controller

use super::display::{format_number, DisplayValue};
use crate::arithmetic::{self, Operator};
use serde::{Deserialize, Serialize};

/// Default cap on typed characters in the display
pub const DEFAULT_MAX_INPUT_LEN: usize = 7;

/// Everything the calculator remembers between keystrokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub display: DisplayValue,

    /// Operator pressed but not yet consumed by the next operand
    pub pending_operator: Option<Operator>,

    /// Operator applied at equals time
    pub last_operator: Option<Operator>,

    /// Left-hand operand for the next equals
    pub stacked_operand: f64,

    pub memory: f64,

    /// Next digit entry starts a fresh number
    pub clear_after_equals: bool,

    pub max_input_len: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN)
    }
}

/// What the rendering sink shows after a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub display: String,
    pub memory: String,
}

impl SessionState {
    pub fn new(max_input_len: usize) -> Self {
        SessionState {
            display: DisplayValue::default(),
            pending_operator: None,
            last_operator: None,
            stacked_operand: 0.0,
            memory: 0.0,
            clear_after_equals: false,
            max_input_len,
        }
    }

    pub fn render(&self) -> Rendered {
        Rendered {
            display: self.display.render(),
            memory: format_number(self.memory),
        }
    }

    /// Digit or decimal point entry
    pub(crate) fn enter(&mut self, ch: char) {
        if self.clear_after_equals {
            self.display = DisplayValue::default();
            self.clear_after_equals = false;
        }

        match self.pending_operator.take() {
            None => {
                if !self.display.push(ch, self.max_input_len) {
                    tracing::trace!(input = %ch, "entry ignored");
                }
            }
            Some(op) => {
                self.stacked_operand = self.display.as_number();
                self.display = DisplayValue::starting_with(ch);
                self.last_operator = Some(op);
            }
        }
    }

    pub(crate) fn select_operator(&mut self, op: Operator) {
        self.clear_after_equals = false;
        self.pending_operator = Some(op);
    }

    pub(crate) fn evaluate(&mut self) {
        let Some(op) = self.last_operator else {
            tracing::debug!("equals with no operator");
            return;
        };
        self.clear_after_equals = true;

        if op == Operator::Divide && self.display.is_zero() {
            tracing::warn!(dividend = self.stacked_operand, "division by zero");
            self.display = DisplayValue::DivideByZero;
            return;
        }

        let result = op.apply(self.stacked_operand, self.display.as_number());
        tracing::debug!(left = self.stacked_operand, %op, result, "evaluated");
        self.display = DisplayValue::from_result(result);
    }

    pub(crate) fn clear(&mut self) {
        self.display = DisplayValue::default();
    }

    pub(crate) fn memory_set(&mut self) {
        self.memory = arithmetic::memory_set(self.display.as_number());
    }

    pub(crate) fn memory_add(&mut self) {
        self.memory = arithmetic::memory_add(self.memory, self.display.as_number());
    }

    pub(crate) fn memory_subtract(&mut self) {
        self.memory = arithmetic::memory_subtract(self.memory, self.display.as_number());
    }

    pub(crate) fn memory_clear(&mut self) {
        self.memory = arithmetic::memory_clear();
    }
}
