//! The calculator front door.

use super::{CalculatorOptions, Error};
use crate::ToOwned;
use crate::arithmetic::BitWidth;
use crate::evaluator::{EvaluatorOptions, Evaluation, Evaluator};

/// Evaluates postfix expressions and reports failures as diagnostics.
#[derive(Debug, Clone)]
pub struct Calculator {
    evaluator: Evaluator,
}

impl Calculator {
    pub fn new(options: CalculatorOptions) -> Self {
        Self {
            evaluator: Evaluator::with_options(options.evaluator),
        }
    }

    /// Creates a calculator for `bits`-wide values with default options.
    pub fn with_bits(bits: u32) -> Result<Self, Error> {
        let bit_width = BitWidth::new(bits)?;
        Ok(Self::new(CalculatorOptions {
            evaluator: EvaluatorOptions {
                bit_width,
                ..EvaluatorOptions::default()
            },
        }))
    }

    pub fn bit_width(&self) -> BitWidth {
        self.evaluator.options().bit_width
    }

    /// Evaluates `source`.
    ///
    /// `Ok(None)` means the expression was empty.
    pub fn evaluate(&mut self, source: &str) -> Result<Option<Evaluation>, Error> {
        self.evaluator
            .evaluate(source)
            .map_err(|err| Error::evaluation(&err, source.to_owned()))
    }
}
