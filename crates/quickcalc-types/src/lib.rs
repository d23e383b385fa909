//! Shared types for quickcalc.
//!
//! This crate defines source spans, the fixed error catalogue, and the
//! result-pair returned to callers of the evaluator.

mod error;
mod evaluation;
mod span;

pub use error::{ErrorKind, EvalError};
pub use evaluation::Evaluation;
pub use span::Span;

/// Result type used throughout quickcalc.
pub type Result<T> = std::result::Result<T, EvalError>;
