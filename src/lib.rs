//! # calcline
//!
//! calcline is an interactive line-oriented calculator written in Rust.
//! It lexes, parses and evaluates one arithmetic expression per line, with
//! support for operator precedence, trigonometric functions in radians or
//! degrees, logarithms, roots, rounding and random numbers.

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
    ast::Statement,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::{core::parse_line, utils::unexpected},
    },
};
pub use crate::{
    error::CalcError,
    interpreter::evaluator::core::Outcome,
    util::num::format_value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement, command, expression and operator types.
/// - Attaches byte offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a line. It carries detailed information about failures,
/// including the offending token, its position and the function involved.
///
/// # Responsibilities
/// - Defines error enums for every stage (lexer, parser, evaluator).
/// - Wraps them in a single `CalcError` for the line driver.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the session
/// state (angle mode and random source) to provide the complete pipeline for
/// one input line.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides the `Context` entry point for evaluating lines.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers used throughout the evaluator and
/// the binary: safe conversions between integer and floating-point types,
/// and the rendering of results for display.
///
/// # Responsibilities
/// - Safely convert between `i32`, `i64` and `f64` without silent data loss.
/// - Format results with a fixed number of decimals.
pub mod util;

/// Evaluates a single expression in a fresh session.
///
/// The expression is evaluated in radians mode with an entropy-seeded random
/// source. Commands (`exit`, `help`, `rad`, `deg`) are not expressions and
/// are rejected as unexpected tokens; use
/// [`Context::eval_line`](interpreter::evaluator::core::Context::eval_line)
/// to run a whole session.
///
/// # Errors
/// Returns the first lexical, syntactic or evaluation error.
///
/// # Examples
/// ```
/// use calcline::{CalcError, evaluate, format_value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(format_value(evaluate("0.1 + 0.2").unwrap()), "0.3");
///
/// let error = evaluate("sqrt(-1)").unwrap_err();
/// assert!(matches!(error, CalcError::Eval(_)));
///
/// assert!(evaluate("deg").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(source)?;

    match parse_line(&tokens)? {
        Statement::Expression(expr) => Ok(Context::new().eval(&expr)?),
        Statement::Command(_) => {
            let (token, position) = &tokens[0];
            Err(unexpected(token, *position).into())
        },
    }
}
