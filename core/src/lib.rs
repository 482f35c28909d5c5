#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Bounded-width postfix calculator core.
//!
//! Expressions are written in reverse Polish notation (`3 4 + 2 *`) and
//! evaluated over a fixed number of bits. Every operand, intermediate value
//! and result must fit in `[0, 2^bits - 1]`; anything else is an error.
//!
//! ```
//! use bitcalc_core::evaluator::Evaluator;
//!
//! let mut evaluator = Evaluator::new(8).unwrap();
//! let result = evaluator.evaluate("3 4 + 2 *").unwrap().unwrap();
//! assert_eq!(result.decimal, 14);
//! assert_eq!(result.binary, "00001110");
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{borrow::ToOwned, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod arithmetic;
pub mod evaluator;
pub mod stack;
pub mod syntax;
