//! Configuration options for the evaluator.

use crate::arithmetic::BitWidth;

/// When numeric literals are checked against the bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralValidation {
    /// Reject an out-of-range literal as soon as it is read.
    #[default]
    Eager,
    /// Push literals unchecked; the next operator (or the final binary
    /// rendering) rejects them instead.
    Lazy,
}

/// Configuration options for expression evaluation.
///
/// # Example
///
/// ```
/// use bitcalc_core::arithmetic::BitWidth;
/// use bitcalc_core::evaluator::{EvaluatorOptions, LiteralValidation};
///
/// let options = EvaluatorOptions {
///     bit_width: BitWidth::new(16).unwrap(),
///     literal_validation: LiteralValidation::Lazy,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluatorOptions {
    /// Width every operand and result must fit in.
    ///
    /// Default: 8 bits
    pub bit_width: BitWidth,

    /// Default: [`LiteralValidation::Eager`]
    pub literal_validation: LiteralValidation,
}
