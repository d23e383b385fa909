//! quickcalc lexer: splits an input line into whitespace-delimited tokens
//! and parses numeric literals.

pub mod lexer;
pub mod number;
pub mod token;

pub use lexer::Lexer;
pub use number::parse_number;
pub use token::Token;
