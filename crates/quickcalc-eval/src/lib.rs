//! quickcalc evaluator.
//!
//! Evaluates a single binary expression of the form
//! `<number> <operator> <number>`:
//!
//! ```text
//! input line → Lexer → [left, operator, right] → parse operands → dispatch → f64
//! ```
//!
//! ```
//! use quickcalc_eval::{evaluate, try_evaluate};
//!
//! assert_eq!(evaluate(Some("7 / 2")), Ok(3.5));
//!
//! let failed = try_evaluate(Some("5 / 0"));
//! assert!(!failed.success);
//! assert_eq!(failed.message, "Cannot divide by zero.");
//! ```

pub mod evaluator;
pub mod math;
pub mod operator;

pub use evaluator::{evaluate, try_evaluate};
pub use math::{absolute_value, power, square, strict_divide};
pub use operator::Operator;
pub use quickcalc_types::{ErrorKind, EvalError, Evaluation};
