//! Public API for front ends.
//!
//! [`Calculator`] wraps an [`Evaluator`](crate::evaluator::Evaluator) and
//! turns its failures into [`Diagnostic`]s that carry the source text, so a
//! console or editor can point at the offending token.
//!
//! # Example
//!
//! ```
//! use bitcalc_core::api::{Calculator, Error};
//!
//! let mut calculator = Calculator::with_bits(8).unwrap();
//! let result = calculator.evaluate("3 4 +").unwrap().unwrap();
//! assert_eq!(result.binary, "00000111");
//!
//! let Err(Error::Evaluation { diagnostic, .. }) = calculator.evaluate("3 +") else {
//!     panic!("expected an evaluation error");
//! };
//! assert_eq!(diagnostic.code, "E004");
//! ```

pub mod calculator;
pub mod error;
pub mod options;

pub use calculator::Calculator;
pub use error::{Diagnostic, Error, Severity};
pub use options::CalculatorOptions;
