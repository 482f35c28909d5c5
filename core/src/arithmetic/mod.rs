//! Fixed-width unsigned arithmetic.
//!
//! Every operation validates both operands and the result against the
//! configured [`BitWidth`]. Raw results are computed in `i128`, which is wide
//! enough for any sum, difference or product of two `u64` values, so overflow
//! is always detected and never wraps.

mod error;
mod width;

#[cfg(test)]
mod arithmetic_test;

pub use error::{ArithmeticError, InvalidBitWidth};
pub use width::{BitWidth, MAX_BIT_WIDTH};

use crate::{String, syntax::Operator};

/// Range-checked `+`, `-` and `*` over a fixed bit width.
///
/// ```
/// use bitcalc_core::arithmetic::{ArithmeticError, BitWidth, BoundedArithmetic};
///
/// let arith = BoundedArithmetic::new(BitWidth::new(8).unwrap());
/// assert_eq!(arith.add(200, 55), Ok(255));
/// assert!(matches!(arith.add(200, 56), Err(ArithmeticError::OutOfRange { .. })));
/// assert_eq!(arith.to_binary(5).unwrap(), "00000101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedArithmetic {
    width: BitWidth,
}

impl BoundedArithmetic {
    pub fn new(width: BitWidth) -> Self {
        Self { width }
    }

    pub fn width(&self) -> BitWidth {
        self.width
    }

    pub fn max_value(&self) -> u64 {
        self.width.max_value()
    }

    /// Checks that `value` is in `[0, max_value]` and narrows it to `u64`.
    ///
    /// Accepts any integer that widens losslessly into `i128`, so negative
    /// intermediates are rejected here rather than by the caller.
    pub fn validate(&self, value: impl Into<i128>) -> Result<u64, ArithmeticError> {
        let value = value.into();
        let max = self.max_value();
        if value < 0 || value > i128::from(max) {
            return Err(ArithmeticError::OutOfRange {
                value,
                bits: self.width.bits(),
                max,
            });
        }
        // In range, so it fits.
        Ok(value as u64)
    }

    pub fn add(&self, a: u64, b: u64) -> Result<u64, ArithmeticError> {
        let (a, b) = self.validate_operands(a, b)?;
        self.validate(a + b)
    }

    pub fn subtract(&self, a: u64, b: u64) -> Result<u64, ArithmeticError> {
        let (lhs, rhs) = self.validate_operands(a, b)?;
        let result = lhs - rhs;
        if result < 0 {
            return Err(ArithmeticError::NegativeResult { lhs: a, rhs: b });
        }
        self.validate(result)
    }

    pub fn multiply(&self, a: u64, b: u64) -> Result<u64, ArithmeticError> {
        let (a, b) = self.validate_operands(a, b)?;
        self.validate(a * b)
    }

    /// Applies `op` to `lhs` and `rhs` (in that order).
    pub fn apply(&self, op: Operator, lhs: u64, rhs: u64) -> Result<u64, ArithmeticError> {
        match op {
            Operator::Add => self.add(lhs, rhs),
            Operator::Sub => self.subtract(lhs, rhs),
            Operator::Mul => self.multiply(lhs, rhs),
        }
    }

    /// Renders `value` as exactly `bits` binary digits, most significant
    /// first, zero padded.
    ///
    /// The value is validated again first, so an unchecked literal can never
    /// be silently truncated.
    pub fn to_binary(&self, value: u64) -> Result<String, ArithmeticError> {
        let value = self.validate(value)?;
        let width = self.width.bits() as usize;
        Ok(crate::format!("{:0width$b}", value, width = width))
    }

    fn validate_operands(&self, a: u64, b: u64) -> Result<(i128, i128), ArithmeticError> {
        let a = self.validate(a)?;
        let b = self.validate(b)?;
        Ok((i128::from(a), i128::from(b)))
    }
}
