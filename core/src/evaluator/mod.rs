//! Postfix (reverse Polish notation) evaluator.
//!
//! Tokens are consumed left to right. Literals are pushed onto a stack;
//! each operator pops its right operand, then its left operand, applies the
//! bounded operation and pushes the result. A well-formed expression leaves
//! exactly one value behind.
//!
//! ## Example
//!
//! ```
//! use bitcalc_core::arithmetic::BitWidth;
//! use bitcalc_core::evaluator::{self, EvalErrorKind};
//!
//! let width = BitWidth::new(8).unwrap();
//!
//! let result = evaluator::evaluate(width, "5 3 -").unwrap().unwrap();
//! assert_eq!((result.decimal, result.binary.as_str()), (2, "00000010"));
//!
//! let err = evaluator::evaluate(width, "3 5 -").unwrap_err();
//! assert!(matches!(err.kind, EvalErrorKind::NegativeResult { .. }));
//!
//! assert_eq!(evaluator::evaluate(width, "   ").unwrap(), None);
//! ```

mod error;
mod eval;
mod options;


pub use error::{EvalError, EvalErrorKind};
pub use eval::{Evaluation, Evaluator};
pub use options::{EvaluatorOptions, LiteralValidation};

use crate::arithmetic::BitWidth;

/// Evaluate a single expression with default options at the given width.
///
/// Use an [`Evaluator`] directly to evaluate several expressions or to
/// change [`EvaluatorOptions`].
pub fn evaluate(width: BitWidth, expression: &str) -> Result<Option<Evaluation>, EvalError> {
    Evaluator::with_options(EvaluatorOptions {
        bit_width: width,
        ..EvaluatorOptions::default()
    })
    .evaluate(expression)
}
