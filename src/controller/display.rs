//! The value shown on the calculator screen
//!
//! Input is accumulated as text so that what the user typed is exactly what is
//! shown, including a trailing decimal point. The text is only parsed when an
//! operand is needed.

use serde::{Deserialize, Serialize};

/// Shown in place of a result when the divisor is zero
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error! Can not divide by 0!";

/// Contents of the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DisplayValue {
    /// Digits typed so far, or a formatted result
    Entry(String),
    /// The last evaluation divided by zero
    DivideByZero,
}

impl Default for DisplayValue {
    fn default() -> Self {
        DisplayValue::Entry(String::new())
    }
}

impl DisplayValue {
    /// Start a fresh entry from a single input character
    pub fn starting_with(ch: char) -> Self {
        let mut value = DisplayValue::default();
        value.push(ch, usize::MAX);
        value
    }

    /// Show an evaluation result
    pub fn from_result(value: f64) -> Self {
        DisplayValue::Entry(format_number(value))
    }

    /// Append a digit or `'.'`; returns `false` when the input was ignored.
    ///
    /// Input is ignored once the entry holds `max_len` characters, and a second
    /// decimal point is always ignored.
    pub fn push(&mut self, ch: char, max_len: usize) -> bool {
        if let DisplayValue::DivideByZero = self {
            *self = DisplayValue::default();
        }
        let DisplayValue::Entry(text) = self else {
            return false;
        };

        if text.len() >= max_len {
            return false;
        }

        match ch {
            '.' if text.contains('.') => false,
            '.' if text.is_empty() => {
                text.push_str("0.");
                true
            }
            '.' => {
                text.push('.');
                true
            }
            '0'..='9' => {
                // A lone zero is replaced rather than prefixed
                if *text == "0" {
                    text.clear();
                }
                text.push(ch);
                true
            }
            _ => false,
        }
    }

    /// Numeric value of the display; empty or error reads as zero
    pub fn as_number(&self) -> f64 {
        match self {
            DisplayValue::Entry(text) => text.parse().unwrap_or(0.0),
            DisplayValue::DivideByZero => 0.0,
        }
    }

    /// Whether this value would be a zero divisor
    pub fn is_zero(&self) -> bool {
        self.as_number() == 0.0
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayValue::DivideByZero)
    }

    /// Text for the rendering sink
    pub fn render(&self) -> String {
        match self {
            DisplayValue::Entry(text) if text.is_empty() => "0".to_string(),
            DisplayValue::Entry(text) => text.clone(),
            DisplayValue::DivideByZero => DIVIDE_BY_ZERO_MESSAGE.to_string(),
        }
    }
}

/// Magnitudes at or past these bounds are shown in exponent form
const EXPONENT_ABOVE: f64 = 1e15;
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a number for display: whole numbers without a fractional part,
/// very large or very small magnitudes as `1.5e20`, everything else in
/// shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        format!("{:e}", value)
    } else if value.fract() == 0.0 {
        // Casting also folds -0 into 0
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> DisplayValue {
        DisplayValue::Entry(text.to_string())
    }

    #[test]
    fn test_push_digits_and_point() {
        let mut value = DisplayValue::default();
        for ch in "12.5".chars() {
            assert!(value.push(ch, 7));
        }
        assert_eq!(value, entry("12.5"));
        assert!(!value.push('.', 7));
        assert_eq!(value.as_number(), 12.5);
    }

    #[test]
    fn test_leading_point_gets_zero() {
        let mut value = DisplayValue::default();
        value.push('.', 7);
        assert_eq!(value.render(), "0.");
        assert_eq!(DisplayValue::starting_with('.'), entry("0."));
    }

    #[test]
    fn test_lone_zero_is_replaced() {
        let mut value = DisplayValue::default();
        value.push('0', 7);
        value.push('0', 7);
        value.push('4', 7);
        assert_eq!(value, entry("4"));
    }

    #[test]
    fn test_cap_ignores_input() {
        let mut value = DisplayValue::default();
        for _ in 0..7 {
            assert!(value.push('9', 7));
        }
        assert!(!value.push('1', 7));
        assert!(!value.push('.', 7));
        assert_eq!(value.render(), "9999999");
    }

    #[test]
    fn test_render_empty_and_error() {
        assert_eq!(DisplayValue::default().render(), "0");
        assert_eq!(DisplayValue::DivideByZero.render(), DIVIDE_BY_ZERO_MESSAGE);
        assert!(DisplayValue::DivideByZero.is_zero());
    }

    #[test]
    fn test_zero_detection() {
        assert!(entry("0").is_zero());
        assert!(entry("0.").is_zero());
        assert!(entry("").is_zero());
        assert!(!entry("0.5").is_zero());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_extreme_magnitudes() {
        assert_eq!(format_number(999_999_999_999_999.0), "999999999999999");
        assert_eq!(format_number(1e15), "1e15");
        assert_eq!(format_number(-2.5e20), "-2.5e20");
        assert_eq!(format_number(1.5e-9), "1.5e-9");
        assert_eq!(format_number(0.000001), "0.000001");

        let huge = format_number(8.999991000004050e70);
        assert!(huge.len() <= 24, "{huge}");
        assert!(huge.ends_with("e70"));
    }

    #[test]
    fn test_exponent_result_reads_back() {
        let value = DisplayValue::from_result(3.0e20);
        assert_eq!(value.render(), "3e20");
        assert_eq!(value.as_number(), 3.0e20);
    }
}
