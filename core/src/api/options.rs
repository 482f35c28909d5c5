//! Configuration options for the calculator.

use crate::evaluator::EvaluatorOptions;

/// Configuration options for a [`super::Calculator`].
///
/// # Example
///
/// ```
/// use bitcalc_core::api::CalculatorOptions;
///
/// let options = CalculatorOptions::default();
/// assert_eq!(options.evaluator.bit_width.bits(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorOptions {
    /// Options passed through to the evaluator.
    pub evaluator: EvaluatorOptions,
}
