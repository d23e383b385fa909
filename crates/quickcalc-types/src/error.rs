use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why an evaluation was rejected.
///
/// Variants are listed in the order they are checked: a blank line is
/// reported before a malformed one, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Absent, empty, or whitespace-only input.
    NoInput,
    /// Token count other than three.
    InvalidFormat,
    /// Either operand is not a number.
    InvalidNumber,
    /// Operator outside `+ - * x X /`.
    UnsupportedOperator,
    /// Right operand of `/` is zero.
    DivideByZero,
}

impl ErrorKind {
    /// The fixed user-facing message for this kind.
    ///
    /// These strings are part of the public contract and must not change.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoInput => "No input provided.",
            Self::InvalidFormat => "Invalid format. Use: number operator number",
            Self::InvalidNumber => "Invalid number.",
            Self::UnsupportedOperator => "Unsupported operator. Use +, -, *, /",
            Self::DivideByZero => "Cannot divide by zero.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A recoverable evaluation failure.
///
/// Displays as the bare catalogue message so callers can print it
/// verbatim. The span, when present, points at the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with no source location.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, span: None }
    }

    /// Create an error pointing at `span`.
    pub fn at(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
        }
    }

    /// The fixed user-facing message.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<ErrorKind> for EvalError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
