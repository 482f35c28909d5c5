//! Bounded arithmetic errors.

/// Raised when constructing a [`super::BitWidth`] outside `1..=MAX_BIT_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Bit size {width} is not supported (expected 1 to {max})", max = super::MAX_BIT_WIDTH)]
pub struct InvalidBitWidth {
    pub width: u32,
}

/// Failure of a single bounded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// An operand or result does not fit in `[0, max]`.
    #[error("Value {value} exceeds the {bits}-bit limit (0 to {max})")]
    OutOfRange { value: i128, bits: u32, max: u64 },

    /// `lhs - rhs` would be negative.
    #[error("Result of {lhs} - {rhs} is negative, cannot represent in unsigned binary")]
    NegativeResult { lhs: u64, rhs: u64 },
}
