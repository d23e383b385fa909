//! Token type for the quickcalc lexer.

use quickcalc_types::Span;
use std::fmt;

/// A whitespace-delimited slice of the input line.
///
/// Tokens carry no kind of their own; the evaluator classifies them by
/// position (left operand, operator, right operand).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token's text, borrowed from the input.
    pub text: &'src str,
    /// Byte range of `text` within the input.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(text: &'src str, span: Span) -> Self {
        Self { text, span }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
