//! Single-expression evaluator.
//!
//! Checks run in a fixed order and stop at the first failure:
//! blank input, token count, operand parsing, then operator dispatch
//! (which includes the zero-divisor check).

use quickcalc_lexer::{parse_number, Lexer, Token};
use quickcalc_types::{ErrorKind, EvalError, Evaluation, Result};
use tracing::{debug, trace};

use crate::operator::Operator;

/// Evaluate `<number> <operator> <number>`.
///
/// `None` stands for an absent input line and is treated like an empty
/// one.
pub fn evaluate(input: Option<&str>) -> Result<f64> {
    let result = evaluate_line(input);
    match &result {
        Ok(value) => trace!(value, "evaluated"),
        Err(err) => debug!(kind = ?err.kind, span = ?err.span, "evaluation rejected"),
    }
    result
}

/// Evaluate and flatten the outcome into an [`Evaluation`] result-pair.
pub fn try_evaluate(input: Option<&str>) -> Evaluation {
    evaluate(input).into()
}

fn evaluate_line(input: Option<&str>) -> Result<f64> {
    let source = match input {
        Some(source) if !source.trim().is_empty() => source,
        _ => return Err(ErrorKind::NoInput.into()),
    };

    let tokens = Lexer::new(source).lex();
    trace!(?tokens, "lexed");
    let [left, op, right] = tokens.as_slice() else {
        return Err(format_error(&tokens));
    };

    let lhs = operand(left)?;
    let rhs = operand(right)?;

    let operator = Operator::from_symbol(op.text)
        .ok_or_else(|| EvalError::at(ErrorKind::UnsupportedOperator, op.span))?;

    if operator == Operator::Divide && rhs == 0.0 {
        return Err(EvalError::at(ErrorKind::DivideByZero, right.span));
    }

    Ok(operator.apply(lhs, rhs))
}

fn operand(token: &Token<'_>) -> Result<f64> {
    parse_number(token.text).ok_or_else(|| EvalError::at(ErrorKind::InvalidNumber, token.span))
}

/// `InvalidFormat`, spanning every token that was found.
fn format_error(tokens: &[Token<'_>]) -> EvalError {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => {
            EvalError::at(ErrorKind::InvalidFormat, first.span.merge(last.span))
        }
        _ => EvalError::new(ErrorKind::InvalidFormat),
    }
}
