//! # reckon
//!
//! reckon is an integer expression calculator written in Rust.
//! It evaluates single-line expressions with `+ - * / ^`, parentheses, runs
//! of unary signs and named variables, by normalizing the text into tokens,
//! converting them to postfix order with the shunting-yard algorithm and
//! running the result on a stack machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::eval_postfix, normalizer::normalize, postfix::to_postfix,
        scope::VariableScope,
    },
};

/// Provides the error type shared by the whole calculator.
///
/// # Responsibilities
/// - Defines one error variant per failure kind (invalid expression, unknown
///   variable, division by zero, overflow, invalid identifier, invalid
///   assignment).
/// - Exposes a copyable [`ErrorKind`](error::ErrorKind) discriminant.
/// - Renders each error as the fixed message shown to the user.
pub mod error;
/// Implements the expression pipeline and the assignment handler.
///
/// This module contains every stage a line goes through: lexing,
/// normalization into infix tokens, shunting-yard conversion to postfix and
/// stack evaluation, together with the variable scope they read from.
///
/// # Responsibilities
/// - Turns raw text into tokens, resolving variables on the way.
/// - Orders tokens by operator precedence.
/// - Evaluates the postfix form and reports arithmetic failures.
pub mod interpreter;
/// Drives a calculator session one line at a time.
///
/// The session owns the variable scope, recognizes `/` commands and
/// assignments, and maps every failure to a user-facing reply.
pub mod session;

/// Evaluates an expression against a scope.
///
/// Runs the full pipeline: [`normalize`], [`to_postfix`] and
/// [`eval_postfix`]. The first failing stage short-circuits the rest.
///
/// # Errors
/// Returns `InvalidExpression` for malformed input, `UnknownVariable` for an
/// unbound name, and `DivisionByZero` or `Overflow` for arithmetic failures.
///
/// # Examples
/// ```
/// use reckon::{error::ErrorKind, evaluate, interpreter::scope::VariableScope};
///
/// let mut scope = VariableScope::new();
/// assert_eq!(evaluate("1 + 2 * 3", &scope), Ok(7));
/// assert_eq!(evaluate("2 ^ 3 ^ 2", &scope), Ok(64));
///
/// scope.set("a", 5);
/// assert_eq!(evaluate("a + 3", &scope), Ok(8));
/// assert_eq!(evaluate("5 / 0", &scope).unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(expression: &str, scope: &VariableScope) -> CalcResult<i64> {
    let infix = normalize(expression, scope)?;
    let postfix = to_postfix(&infix)?;
    let value = eval_postfix(&postfix)?;

    tracing::debug!(expression, value, "evaluated");
    Ok(value)
}
