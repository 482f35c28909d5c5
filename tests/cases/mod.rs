//! Shared helpers for the integration tests.

pub use bitcalc::{Calculator, EvalErrorKind, Evaluator};

/// Defines a test evaluating `input` at `bits` width.
///
/// ```ignore
/// eval_case!(name, bits: 8, input: "3 4 +", result: (7, "00000111"));
/// eval_case!(name, bits: 8, input: "", result: None);
/// eval_case!(name, bits: 8, input: "3 +", error: InsufficientOperands { .. });
/// ```
macro_rules! eval_case {
    ($name:ident, bits: $bits:expr, input: $input:expr, result: None $(,)?) => {
        #[test]
        fn $name() {
            let mut evaluator = $crate::cases::Evaluator::new($bits).unwrap();
            pretty_assertions::assert_eq!(evaluator.evaluate($input), Ok(None));
        }
    };
    ($name:ident, bits: $bits:expr, input: $input:expr, result: ($decimal:expr, $binary:expr) $(,)?) => {
        #[test]
        fn $name() {
            let mut evaluator = $crate::cases::Evaluator::new($bits).unwrap();
            let result = evaluator
                .evaluate($input)
                .expect("evaluation failed")
                .expect("no result");
            pretty_assertions::assert_eq!(
                (result.decimal, result.binary.as_str()),
                ($decimal, $binary)
            );
        }
    };
    ($name:ident, bits: $bits:expr, input: $input:expr, error: $($kind:tt)+) => {
        #[test]
        fn $name() {
            let mut evaluator = $crate::cases::Evaluator::new($bits).unwrap();
            let err = evaluator.evaluate($input).expect_err("evaluation should fail");
            assert!(
                matches!(err.kind, $crate::cases::EvalErrorKind::$($kind)+),
                "unexpected error: {:?}",
                err.kind
            );
        }
    };
}
