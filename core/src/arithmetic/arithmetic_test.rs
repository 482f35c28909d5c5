//! Unit and property tests for bounded arithmetic.

use super::*;
use crate::syntax::Operator;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn arith(bits: u32) -> BoundedArithmetic {
    BoundedArithmetic::new(BitWidth::new(bits).unwrap())
}

/// A width together with a value that fits in it.
fn width_and_value() -> impl Strategy<Value = (u32, u64)> {
    (1u32..=31).prop_flat_map(|bits| (Just(bits), 0..=(1u64 << bits) - 1))
}

/// A width together with two values that fit in it, biased toward the edges.
fn width_and_pair() -> impl Strategy<Value = (u32, u64, u64)> {
    (1u32..=31).prop_flat_map(|bits| {
        let max = (1u64 << bits) - 1;
        let operand = prop_oneof![Just(0u64), Just(1u64.min(max)), Just(max), 0..=max];
        (Just(bits), operand.clone(), operand)
    })
}

#[test]
fn test_validate_edges() {
    let a = arith(8);
    assert_eq!(a.validate(0), Ok(0));
    assert_eq!(a.validate(255), Ok(255));
    assert_eq!(
        a.validate(256),
        Err(ArithmeticError::OutOfRange {
            value: 256,
            bits: 8,
            max: 255
        })
    );
    assert_eq!(
        a.validate(-1),
        Err(ArithmeticError::OutOfRange {
            value: -1,
            bits: 8,
            max: 255
        })
    );
}

#[test]
fn test_add() {
    let a = arith(8);
    assert_eq!(a.add(3, 4), Ok(7));
    assert_eq!(a.add(255, 0), Ok(255));
    assert!(matches!(
        a.add(255, 1),
        Err(ArithmeticError::OutOfRange { value: 256, .. })
    ));
}

#[test]
fn test_add_rejects_out_of_range_operand() {
    let a = arith(8);
    assert!(matches!(
        a.add(300, 0),
        Err(ArithmeticError::OutOfRange { value: 300, .. })
    ));
    assert!(matches!(
        a.add(0, 300),
        Err(ArithmeticError::OutOfRange { value: 300, .. })
    ));
}

#[test]
fn test_subtract() {
    let a = arith(8);
    assert_eq!(a.subtract(5, 3), Ok(2));
    assert_eq!(a.subtract(3, 3), Ok(0));
    assert_eq!(
        a.subtract(3, 5),
        Err(ArithmeticError::NegativeResult { lhs: 3, rhs: 5 })
    );
}

#[test]
fn test_subtract_validates_operands_before_sign() {
    // 3 - 300 is negative, but 300 is out of range first.
    assert!(matches!(
        arith(8).subtract(3, 300),
        Err(ArithmeticError::OutOfRange { value: 300, .. })
    ));
}

#[test]
fn test_multiply() {
    let a = arith(8);
    assert_eq!(a.multiply(15, 17), Ok(255));
    assert_eq!(a.multiply(0, 255), Ok(0));
    assert!(matches!(
        a.multiply(2, 200),
        Err(ArithmeticError::OutOfRange { value: 400, .. })
    ));
}

#[test]
fn test_no_native_wraparound_at_widest_width() {
    let a = arith(MAX_BIT_WIDTH);
    let max = a.max_value();
    assert_eq!(a.add(max - 1, 1), Ok(max));
    assert!(matches!(
        a.add(max, max),
        Err(ArithmeticError::OutOfRange { value, .. }) if value == 2 * i128::from(max)
    ));
    assert!(matches!(
        a.multiply(max, max),
        Err(ArithmeticError::OutOfRange { value, .. }) if value == i128::from(max) * i128::from(max)
    ));
}

#[test]
fn test_apply_dispatch_keeps_operand_order() {
    let a = arith(8);
    assert_eq!(a.apply(Operator::Add, 10, 4), Ok(14));
    assert_eq!(a.apply(Operator::Sub, 10, 4), Ok(6));
    assert_eq!(a.apply(Operator::Mul, 10, 4), Ok(40));
    assert_eq!(
        a.apply(Operator::Sub, 4, 10),
        Err(ArithmeticError::NegativeResult { lhs: 4, rhs: 10 })
    );
}

#[test]
fn test_to_binary() {
    assert_eq!(arith(8).to_binary(7).unwrap(), "00000111");
    assert_eq!(arith(8).to_binary(255).unwrap(), "11111111");
    assert_eq!(arith(1).to_binary(0).unwrap(), "0");
    assert_eq!(arith(4).to_binary(10).unwrap(), "1010");
}

#[test]
fn test_to_binary_revalidates() {
    assert!(matches!(
        arith(4).to_binary(16),
        Err(ArithmeticError::OutOfRange { value: 16, .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        arith(8).add(255, 1).unwrap_err().to_string(),
        "Value 256 exceeds the 8-bit limit (0 to 255)"
    );
    assert_eq!(
        arith(8).subtract(3, 5).unwrap_err().to_string(),
        "Result of 3 - 5 is negative, cannot represent in unsigned binary"
    );
    assert_eq!(
        BitWidth::new(0).unwrap_err().to_string(),
        "Bit size 0 is not supported (expected 1 to 63)"
    );
}

proptest! {
    #[test]
    fn prop_validate_accepts_range((bits, v) in width_and_value()) {
        let a = arith(bits);
        prop_assert_eq!(a.validate(v), Ok(v));
        let above = 1u64 << bits;
        let is_out_of_range =
            |r: Result<u64, ArithmeticError>| matches!(r, Err(ArithmeticError::OutOfRange { .. }));
        prop_assert!(is_out_of_range(a.validate(-1)));
        prop_assert!(is_out_of_range(a.validate(above)));
    }

    #[test]
    fn prop_add((bits, x, y) in width_and_pair()) {
        let a = arith(bits);
        let sum = x + y;
        if sum <= a.max_value() {
            prop_assert_eq!(a.add(x, y), Ok(sum));
        } else {
            let is_out_of_range = matches!(a.add(x, y), Err(ArithmeticError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }
    }

    #[test]
    fn prop_subtract((bits, x, y) in width_and_pair()) {
        let a = arith(bits);
        if x >= y {
            prop_assert_eq!(a.subtract(x, y), Ok(x - y));
        } else {
            prop_assert_eq!(
                a.subtract(x, y),
                Err(ArithmeticError::NegativeResult { lhs: x, rhs: y })
            );
        }
    }

    #[test]
    fn prop_multiply((bits, x, y) in width_and_pair()) {
        let a = arith(bits);
        let product = x * y;
        if product <= a.max_value() {
            prop_assert_eq!(a.multiply(x, y), Ok(product));
        } else {
            let is_out_of_range =
                matches!(a.multiply(x, y), Err(ArithmeticError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }
    }

    #[test]
    fn prop_to_binary_shape_and_round_trip((bits, v) in width_and_value()) {
        let binary = arith(bits).to_binary(v).unwrap();
        prop_assert_eq!(binary.len(), bits as usize);
        prop_assert!(binary.chars().all(|c| c == '0' || c == '1'));
        prop_assert_eq!(u64::from_str_radix(&binary, 2).unwrap(), v);
    }
}
