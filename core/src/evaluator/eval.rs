use core::fmt;

use tracing::{debug, trace};

use super::{EvalError, EvalErrorKind, EvaluatorOptions, LiteralValidation};
use crate::{
    String, ToOwned,
    arithmetic::{BitWidth, BoundedArithmetic, InvalidBitWidth},
    stack::Stack,
    syntax::{Operator, Span, Token, TokenKind, tokenize},
};

/// Stack storage kept across calls; anything a longer expression grew beyond
/// this is released on the next call.
const RETAINED_STACK_CAPACITY: usize = 256;

/// The value an expression reduced to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub decimal: u64,
    /// Exactly as many `0`/`1` digits as the evaluator's bit width.
    pub binary: String,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decimal result: {}", self.decimal)?;
        write!(f, "Binary result: {}", self.binary)
    }
}

/// Postfix evaluator over a fixed bit width.
///
/// One evaluator can be reused for any number of expressions; each call to
/// [`Evaluator::evaluate`] starts from an empty stack.
#[derive(Debug, Clone)]
pub struct Evaluator {
    options: EvaluatorOptions,
    arithmetic: BoundedArithmetic,
    stack: Stack<u64>,
}

impl Evaluator {
    /// Creates an evaluator for `bits`-wide values with default options.
    pub fn new(bits: u32) -> Result<Self, InvalidBitWidth> {
        Ok(Self::with_options(EvaluatorOptions {
            bit_width: BitWidth::new(bits)?,
            ..EvaluatorOptions::default()
        }))
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self {
            options,
            arithmetic: BoundedArithmetic::new(options.bit_width),
            stack: Stack::with_capacity(16),
        }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn arithmetic(&self) -> &BoundedArithmetic {
        &self.arithmetic
    }

    /// Evaluates a postfix expression.
    ///
    /// Returns `Ok(None)` when the expression has no tokens.
    ///
    /// # Errors
    ///
    /// The first failing token aborts evaluation; see [`EvalErrorKind`].
    pub fn evaluate(&mut self, expression: &str) -> Result<Option<Evaluation>, EvalError> {
        self.stack.clear();
        self.stack.shrink_to(RETAINED_STACK_CAPACITY);
        debug!(
            bits = self.options.bit_width.bits(),
            expression, "Evaluating postfix expression"
        );

        let mut extent: Option<Span> = None;
        for token in tokenize(expression) {
            trace!(token = token.text, depth = self.stack.len(), "Token");
            if let Err(err) = self.step(&token) {
                debug!(kind = err.kind.name(), token = token.text, "Evaluation failed");
                return Err(err);
            }
            extent = Some(match extent {
                Some(first) => Span::combine(&first, &token.span),
                None => token.span,
            });
        }

        let result = self.finish(extent);
        if let Err(err) = &result {
            debug!(kind = err.kind.name(), "Evaluation failed");
        }
        result
    }

    /// Applies the operator spelled `symbol` to `lhs` and `rhs` without
    /// touching the stack.
    ///
    /// ```
    /// use bitcalc_core::evaluator::{EvalErrorKind, Evaluator};
    ///
    /// let evaluator = Evaluator::new(8).unwrap();
    /// assert_eq!(evaluator.perform_operation("-", 9, 4).unwrap(), 5);
    /// let err = evaluator.perform_operation("/", 9, 4).unwrap_err();
    /// assert!(matches!(err.kind, EvalErrorKind::InvalidOperator { .. }));
    /// ```
    pub fn perform_operation(&self, symbol: &str, lhs: u64, rhs: u64) -> Result<u64, EvalError> {
        let op: Operator = symbol.parse()?;
        Ok(self.arithmetic.apply(op, lhs, rhs)?)
    }

    #[cfg(test)]
    pub(super) fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    fn step(&mut self, token: &Token<'_>) -> Result<(), EvalError> {
        let at = |kind: EvalErrorKind| EvalError::new(kind, Some(token.span.clone()));

        match token.kind {
            TokenKind::Number(value) => {
                let value = match self.options.literal_validation {
                    LiteralValidation::Eager => self
                        .arithmetic
                        .validate(value)
                        .map_err(|e| at(e.into()))?,
                    LiteralValidation::Lazy => value,
                };
                self.stack.push(value);
            }
            // Can't be held as an operand, so rejected in either mode.
            TokenKind::Oversized(value) => {
                let value = self.arithmetic.validate(value).map_err(|e| at(e.into()))?;
                self.stack.push(value);
            }
            TokenKind::Operator(operator) => {
                let insufficient = || at(EvalErrorKind::InsufficientOperands { operator });
                let rhs = self.stack.pop().map_err(|_| insufficient())?;
                let lhs = self.stack.pop().map_err(|_| insufficient())?;
                let result = self
                    .arithmetic
                    .apply(operator, lhs, rhs)
                    .map_err(|e| at(e.into()))?;
                trace!(%operator, lhs, rhs, result, "Applied operator");
                self.stack.push(result);
            }
            TokenKind::Invalid => {
                return Err(at(EvalErrorKind::UnrecognizedToken {
                    token: token.text.to_owned(),
                }));
            }
        }
        Ok(())
    }

    fn finish(&mut self, extent: Option<Span>) -> Result<Option<Evaluation>, EvalError> {
        let Ok(decimal) = self.stack.pop() else {
            return Ok(None);
        };
        if !self.stack.is_empty() {
            let count = self.stack.len() + 1;
            trace!(leftover = ?self.stack, top = decimal, "Leftover operands");
            return Err(EvalError::new(
                EvalErrorKind::LeftoverOperands { count },
                extent,
            ));
        }
        let binary = self
            .arithmetic
            .to_binary(decimal)
            .map_err(|e| EvalError::new(e, extent))?;
        Ok(Some(Evaluation { decimal, binary }))
    }
}
