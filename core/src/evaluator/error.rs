//! Evaluation errors.
//!
//! Every failure aborts the evaluation it happened in. The kinds fall into
//! two groups:
//!
//! - **Arithmetic**: a value does not fit the configured width
//!   ([`EvalErrorKind::OutOfRange`]) or a subtraction would go negative
//!   ([`EvalErrorKind::NegativeResult`]).
//! - **Malformed expression**: the token sequence is not valid postfix
//!   (see [`EvalErrorKind::is_malformed`]).

use crate::String;
use crate::arithmetic::ArithmeticError;
use crate::stack::StackUnderflow;
use crate::syntax::{InvalidOperator, Operator, Span};

/// An evaluation failure, with the span of the token that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: impl Into<EvalErrorKind>, span: Option<Span>) -> Self {
        Self {
            kind: kind.into(),
            span,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.kind.is_malformed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Pop from an empty stack outside of operator application.
    #[error("Stack is empty")]
    StackUnderflow,

    #[error("Value {value} exceeds the {bits}-bit limit (0 to {max})")]
    OutOfRange { value: i128, bits: u32, max: u64 },

    #[error("Result of {lhs} - {rhs} is negative, cannot represent in unsigned binary")]
    NegativeResult { lhs: u64, rhs: u64 },

    /// An operator found fewer than two values on the stack.
    #[error("Invalid postfix expression: '{operator}' needs two operands")]
    InsufficientOperands { operator: Operator },

    #[error("Invalid token in postfix expression: '{token}'")]
    UnrecognizedToken { token: String },

    /// More than one value was left once every token was consumed.
    #[error("Invalid postfix expression: {count} values left on the stack")]
    LeftoverOperands { count: usize },

    #[error("Invalid operator '{operator}'")]
    InvalidOperator { operator: String },
}

impl EvalErrorKind {
    /// True for errors about the shape of the expression rather than the
    /// values in it.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EvalErrorKind::InsufficientOperands { .. }
                | EvalErrorKind::UnrecognizedToken { .. }
                | EvalErrorKind::LeftoverOperands { .. }
                | EvalErrorKind::InvalidOperator { .. }
        )
    }

    /// Stable variant name, independent of the message text.
    pub fn name(&self) -> &'static str {
        match self {
            EvalErrorKind::StackUnderflow => "StackUnderflow",
            EvalErrorKind::OutOfRange { .. } => "OutOfRange",
            EvalErrorKind::NegativeResult { .. } => "NegativeResult",
            EvalErrorKind::InsufficientOperands { .. } => "InsufficientOperands",
            EvalErrorKind::UnrecognizedToken { .. } => "UnrecognizedToken",
            EvalErrorKind::LeftoverOperands { .. } => "LeftoverOperands",
            EvalErrorKind::InvalidOperator { .. } => "InvalidOperator",
        }
    }
}

impl From<ArithmeticError> for EvalErrorKind {
    fn from(e: ArithmeticError) -> Self {
        match e {
            ArithmeticError::OutOfRange { value, bits, max } => {
                EvalErrorKind::OutOfRange { value, bits, max }
            }
            ArithmeticError::NegativeResult { lhs, rhs } => {
                EvalErrorKind::NegativeResult { lhs, rhs }
            }
        }
    }
}

impl From<StackUnderflow> for EvalErrorKind {
    fn from(_: StackUnderflow) -> Self {
        EvalErrorKind::StackUnderflow
    }
}

impl From<InvalidOperator> for EvalErrorKind {
    fn from(e: InvalidOperator) -> Self {
        EvalErrorKind::InvalidOperator { operator: e.symbol }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind, None)
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(e: ArithmeticError) -> Self {
        EvalError::new(e, None)
    }
}

impl From<StackUnderflow> for EvalError {
    fn from(e: StackUnderflow) -> Self {
        EvalError::new(e, None)
    }
}

impl From<InvalidOperator> for EvalError {
    fn from(e: InvalidOperator) -> Self {
        EvalError::new(e, None)
    }
}
