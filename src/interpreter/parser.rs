/// Entry points for parsing a line.
///
/// Defines `ParseResult`, `parse_line` and `parse_expression`.
pub mod core;

/// Statement parsing.
///
/// Distinguishes control commands (`exit`, `help`, `rad`, `deg`) from
/// expressions.
pub mod statement;

/// Binary operator parsing.
///
/// Holds the precedence table and the precedence-climbing loop for all infix
/// operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix minus, numeric literals, parenthesized groups and function
/// calls.
pub mod unary;

/// Parsing helpers shared by the other parser modules.
pub mod utils;
