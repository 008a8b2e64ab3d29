//! Input events delivered to the controller

use crate::arithmetic::Operator;

/// A discrete user input, whether it came from a keypad control or a key accelerator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A decimal digit, `0..=9`
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    MemorySet,
    MemoryAdd,
    MemorySubtract,
    MemoryClear,
}

impl Event {
    /// Build a digit event, rejecting anything outside `0..=9`
    pub fn digit(d: u32) -> Option<Self> {
        (d <= 9).then_some(Event::Digit(d as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Event::digit(0), Some(Event::Digit(0)));
        assert_eq!(Event::digit(9), Some(Event::Digit(9)));
        assert_eq!(Event::digit(10), None);
    }
}
