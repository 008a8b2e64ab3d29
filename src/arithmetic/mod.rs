//! Four-function arithmetic and the memory register
//!
//! Everything in this module is a pure function over `f64`:
//! - [`ops`]: the closed [`Operator`] set and the binary operations behind it
//! - [`memory`]: the single-slot memory register updates
//!
//! # Division
//!
//! [`divide`] performs no zero check. The controller guards the divisor
//! before evaluating, so a zero divisor never reaches this module from the
//! keypad. Called directly, it follows IEEE 754 and yields `inf` or `NaN`.

pub mod memory;
pub mod ops;

pub use memory::{memory_add, memory_clear, memory_set, memory_subtract};
pub use ops::{add, divide, multiply, subtract, Operator};
