//! bitcalc - bounded-width postfix calculator
//!
//! # Overview
//!
//! Evaluates reverse Polish notation expressions such as `3 4 + 2 *` over a
//! fixed number of bits. Every operand, intermediate value and result must fit
//! in `[0, 2^bits - 1]`; values are unsigned, so a subtraction that would go
//! below zero is an error rather than a wraparound.
//!
//! # Quick Start
//!
//! ```
//! use bitcalc::Calculator;
//!
//! let mut calculator = Calculator::with_bits(8).unwrap();
//! let result = calculator.evaluate("3 4 + 2 *").unwrap().unwrap();
//! assert_eq!(result.decimal, 14);
//! assert_eq!(result.binary, "00001110");
//! ```
//!
//! # Errors
//!
//! Failures come back as [`Error`]. Evaluation errors carry a [`Diagnostic`]
//! pointing at the offending token, which [`render_error`] prints with a
//! source snippet:
//!
//! ```
//! use bitcalc::{Calculator, render_error_to_string_no_color};
//!
//! let mut calculator = Calculator::with_bits(8).unwrap();
//! let err = calculator.evaluate("2 200 *").unwrap_err();
//! let rendered = render_error_to_string_no_color(&err);
//! assert!(rendered.contains("exceeds the 8-bit limit"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from bitcalc_core
pub use bitcalc_core::api::{Calculator, CalculatorOptions, Diagnostic, Error, Severity};

pub use bitcalc_core::arithmetic::{
    ArithmeticError, BitWidth, BoundedArithmetic, InvalidBitWidth, MAX_BIT_WIDTH,
};
pub use bitcalc_core::evaluator::{
    self, EvalError, EvalErrorKind, Evaluation, Evaluator, EvaluatorOptions, LiteralValidation,
};
pub use bitcalc_core::stack::{Stack, StackUnderflow};
pub use bitcalc_core::syntax::{self, Operator, Span};
