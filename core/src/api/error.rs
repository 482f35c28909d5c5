//! Public error types for the calculator API.
//!
//! Evaluator errors are converted to these types at the API boundary so that
//! front ends get a message, a span and a stable code without matching on
//! evaluator internals.

use crate::arithmetic::InvalidBitWidth;
use crate::evaluator::{EvalError, EvalErrorKind};
use crate::syntax::Span;
use crate::{String, ToString, format};
use core::fmt;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The calculator could not be built (e.g. unsupported bit width).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Evaluating an expression failed.
    #[error("Error: {}", .diagnostic.message)]
    Evaluation {
        diagnostic: Diagnostic,
        /// The expression that was evaluated.
        src: String,
    },
}

impl Error {
    pub(crate) fn evaluation(err: &EvalError, src: String) -> Self {
        let span = err.span.clone().unwrap_or(Span(0..src.len()));
        Error::Evaluation {
            diagnostic: Diagnostic {
                severity: Severity::Error,
                message: err.kind.to_string(),
                span,
                help: help_for(&err.kind),
                code: code_for(&err.kind),
            },
            src,
        }
    }
}

impl From<InvalidBitWidth> for Error {
    fn from(err: InvalidBitWidth) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the offending token (or the whole expression).
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Error code (e.g. "E002") identifying the error kind.
    pub code: &'static str,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

fn code_for(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::StackUnderflow => "E001",
        EvalErrorKind::OutOfRange { .. } => "E002",
        EvalErrorKind::NegativeResult { .. } => "E003",
        EvalErrorKind::InsufficientOperands { .. } => "E004",
        EvalErrorKind::UnrecognizedToken { .. } => "E005",
        EvalErrorKind::LeftoverOperands { .. } => "E006",
        EvalErrorKind::InvalidOperator { .. } => "E007",
    }
}

fn help_for(kind: &EvalErrorKind) -> Option<String> {
    match kind {
        EvalErrorKind::OutOfRange { bits, max, .. } => Some(format!(
            "{bits}-bit values range from 0 to {max}; use a wider bit size"
        )),
        EvalErrorKind::NegativeResult { .. } => {
            Some("values are unsigned; the left operand must not be smaller".into())
        }
        EvalErrorKind::InsufficientOperands { .. } => {
            Some("operators come after both of their operands, e.g. `3 4 +`".into())
        }
        EvalErrorKind::UnrecognizedToken { .. } => Some(
            "tokens are non-negative integers or one of `+`, `-`, `*`, separated by spaces"
                .into(),
        ),
        EvalErrorKind::LeftoverOperands { .. } => {
            Some("add operators until a single value remains".into())
        }
        EvalErrorKind::StackUnderflow | EvalErrorKind::InvalidOperator { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            EvalErrorKind::StackUnderflow,
            EvalErrorKind::OutOfRange {
                value: 0,
                bits: 1,
                max: 1,
            },
            EvalErrorKind::NegativeResult { lhs: 0, rhs: 1 },
            EvalErrorKind::InsufficientOperands {
                operator: crate::syntax::Operator::Add,
            },
            EvalErrorKind::UnrecognizedToken { token: "x".into() },
            EvalErrorKind::LeftoverOperands { count: 2 },
            EvalErrorKind::InvalidOperator {
                operator: "/".into(),
            },
        ];
        let mut codes: crate::Vec<_> = kinds.iter().map(code_for).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_every_diagnostic_is_an_error_with_a_code() {
        let err = EvalError::new(EvalErrorKind::LeftoverOperands { count: 2 }, None);
        let Error::Evaluation { diagnostic, .. } = Error::evaluation(&err, "1 2".into()) else {
            panic!("expected an evaluation error");
        };
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.severity.to_string(), "error");
        assert_eq!(diagnostic.code, "E006");
    }

    #[test]
    fn test_missing_span_covers_source() {
        let err = EvalError::new(EvalErrorKind::StackUnderflow, None);
        let Error::Evaluation { diagnostic, .. } = Error::evaluation(&err, "1 2".into()) else {
            panic!("expected an evaluation error");
        };
        assert_eq!(diagnostic.span, Span::new(0, 3));
        assert_eq!(diagnostic.help, None);
    }
}
