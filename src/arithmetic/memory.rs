//! Memory register updates
//!
//! Each function takes the register's current value (where relevant) and
//! returns the new one. The controller owns the register itself.

#[inline]
pub fn memory_set(value: f64) -> f64 {
    value
}

#[inline]
pub fn memory_add(current: f64, value: f64) -> f64 {
    current + value
}

#[inline]
pub fn memory_subtract(current: f64, value: f64) -> f64 {
    current - value
}

#[inline]
pub fn memory_clear() -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_subtract_restores() {
        let start = memory_set(17.5);
        let value = 4.25;
        assert_eq!(memory_subtract(memory_add(start, value), value), start);
    }

    #[test]
    fn test_clear() {
        assert_eq!(memory_clear(), 0.0);
    }
}
