//! Tokenizer for postfix expressions.
//!
//! Tokens are maximal runs of non-whitespace characters. Each token carries
//! its byte span in the source so errors can point at it.

use crate::{String, ToOwned};
use core::fmt;
use core::ops::Range;
use core::str::{CharIndices, FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

/// Binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    /// Looks up an operator by its exact symbol (`+`, `-` or `*`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        }
    }
}

/// Error from parsing an [`Operator`] out of a symbol that isn't one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid operator '{symbol}'")]
pub struct InvalidOperator {
    pub symbol: String,
}

impl FromStr for Operator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s).ok_or_else(|| InvalidOperator {
            symbol: s.to_owned(),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Decimal literal that fits in a `u64`.
    Number(u64),
    /// Decimal literal too large for a `u64`. Saturates at `i128::MAX`.
    Oversized(i128),
    Operator(Operator),
    /// Neither a literal nor an operator, e.g. `x`, `/`, `-3` or `12ab`.
    ///
    /// A token that starts with a digit must be digits throughout; `12ab` is
    /// rejected whole instead of being read as `12`.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    fn classify(text: &'a str, span: Span) -> Self {
        let kind = if text.starts_with(|c: char| c.is_ascii_digit()) {
            classify_literal(text)
        } else if let Some(op) = Operator::from_symbol(text) {
            TokenKind::Operator(op)
        } else {
            TokenKind::Invalid
        };
        Token { kind, text, span }
    }
}

fn classify_literal(text: &str) -> TokenKind {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return TokenKind::Invalid;
    }
    match text.parse::<u64>() {
        Ok(value) => TokenKind::Number(value),
        // Only digits, so the sole failure mode is magnitude.
        Err(_) => TokenKind::Oversized(text.parse::<i128>().unwrap_or(i128::MAX)),
    }
}

/// Splits `source` into whitespace-delimited tokens.
///
/// Whitespace follows [`char::is_whitespace`], the same rule as
/// [`str::split_whitespace`].
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        source,
        chars: source.char_indices(),
    }
}

/// Iterator returned by [`tokenize`].
pub struct Tokens<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = loop {
            let (idx, c) = self.chars.next()?;
            if !c.is_whitespace() {
                break idx;
            }
        };

        let mut end = self.source.len();
        for (idx, c) in self.chars.by_ref() {
            if c.is_whitespace() {
                end = idx;
                break;
            }
        }

        let span = Span::new(start, end);
        Some(Token::classify(span.str_of(self.source), span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(kinds("").is_empty());
        assert!(kinds("   \t\n ").is_empty());
    }

    #[test]
    fn test_spans_track_byte_offsets() {
        let tokens: Vec<_> = tokenize("  12 3\t+ ").collect();
        let spans: Vec<_> = tokens.iter().map(|t| t.span.clone()).collect();
        assert_eq!(spans, [Span::new(2, 4), Span::new(5, 6), Span::new(7, 8)]);
        assert_eq!(tokens[0].text, "12");
        assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Add));
    }

    #[test]
    fn test_token_at_end_of_input() {
        let tokens: Vec<_> = tokenize("3 4 *").collect();
        assert_eq!(tokens[2].span, Span::new(4, 5));
        assert_eq!(tokens[2].span.str_of("3 4 *"), "*");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - *"),
            [
                TokenKind::Operator(Operator::Add),
                TokenKind::Operator(Operator::Sub),
                TokenKind::Operator(Operator::Mul),
            ]
        );
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(kinds("/ x -3 ++ 12ab 4.5"), [TokenKind::Invalid; 6]);
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            kinds("0 007 255"),
            [
                TokenKind::Number(0),
                TokenKind::Number(7),
                TokenKind::Number(255),
            ]
        );
    }

    #[test]
    fn test_oversized_literals() {
        assert_eq!(
            kinds("18446744073709551616"),
            [TokenKind::Oversized(18446744073709551616)]
        );
        let huge = "9".repeat(60);
        assert_eq!(kinds(&huge), [TokenKind::Oversized(i128::MAX)]);
    }

    #[test]
    fn test_unicode_whitespace_and_text() {
        let source = "1\u{3000}2 ×";
        let tokens: Vec<_> = tokenize(source).collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "×");
        assert_eq!(tokens[2].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].span.str_of(source), "2");
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("/"), None);
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(InvalidOperator {
                symbol: "%".into()
            })
        );
    }
}
