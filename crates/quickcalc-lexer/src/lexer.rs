//! Whitespace tokenizer.
//!
//! Runs of any Unicode whitespace separate tokens; leading, trailing, and
//! repeated separators never produce empty tokens.

use quickcalc_types::Span;

use crate::token::Token;

/// The quickcalc lexer.
///
/// Yields [`Token`]s lazily as an iterator, or all at once via
/// [`Lexer::lex`].
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// The full input line.
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over `source`.
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Lex the entire input into a token vector.
    pub fn lex(self) -> Vec<Token<'src>> {
        self.collect()
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.skip_whitespace();
        if self.pos >= self.source.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.source[start..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos = start + len;

        Some(Token::new(
            &self.source[start..self.pos],
            Span::new(start, self.pos),
        ))
    }
}
