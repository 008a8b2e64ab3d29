use calctty::arithmetic::{
    add, divide, memory_add, memory_clear, memory_set, memory_subtract, multiply, subtract,
    Operator,
};

#[test]
fn test_operator_dispatch_matches_functions() {
    let (a, b) = (12.5, -4.0);
    assert_eq!(Operator::Add.apply(a, b), add(a, b));
    assert_eq!(Operator::Subtract.apply(a, b), subtract(a, b));
    assert_eq!(Operator::Multiply.apply(a, b), multiply(a, b));
    assert_eq!(Operator::Divide.apply(a, b), divide(a, b));
}

#[test]
fn test_fractional_division() {
    let quotient = divide(1.0, 3.0);
    assert!((quotient * 3.0 - 1.0).abs() < 1e-12);
}

#[test]
fn test_memory_register_sequence() {
    let mut register = memory_clear();
    register = memory_add(register, 10.0);
    register = memory_subtract(register, 2.5);
    assert_eq!(register, 7.5);

    register = memory_set(3.0);
    assert_eq!(register, 3.0);

    register = memory_clear();
    assert_eq!(register, 0.0);
}
