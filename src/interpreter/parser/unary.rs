use std::iter::Peekable;

use crate::{
    ast::{Expr, Function, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::core::arity_of,
        lexer::Token,
        parser::{
            binary::{EXPONENT, parse_binary},
            core::{MAX_NESTING_DEPTH, ParseResult, parse_nested_expression},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Its operand is an
/// exponent-tier expression, so exponentiation binds tighter than negation
/// (`-2^2` is `-(2^2)`) while negation binds tighter than every other binary
/// operator (`-2*3` is `(-2)*3`). Negation may repeat (`--2`) and may appear
/// as the right operand of any operator (`2^-1`).
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Every nested grouping, argument list, prefix minus and right operand
/// raises `depth` by one. Past [`MAX_NESTING_DEPTH`] the token at which the
/// limit is crossed is reported as unexpected, so runaway input fails
/// before the parser or evaluator can exhaust the stack.
///
/// Grammar:
/// ```text
///     unary := "-" binary(EXPONENT)
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of this operand.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth > MAX_NESTING_DEPTH {
        return Err(match tokens.peek() {
                       Some((token, position)) => unexpected(token, *position),
                       None => unexpected(&Token::Eol, 0),
                   });
    }

    if let Some((Token::Minus, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let expr = parse_binary(tokens, EXPONENT, depth + 1)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           position })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | function "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth of this expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, position)) = tokens.peek() else {
        return Err(unexpected(&Token::Eol, 0));
    };
    let position = *position;

    match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value, position })
        },
        Token::LParen => parse_grouping(tokens, depth),
        tok => match token_to_function(tok) {
            Some(function) => parse_function_call(tokens, function, depth),
            None => Err(unexpected(tok, position)),
        },
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// # Errors
/// Returns `UnexpectedToken` if the closing parenthesis is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_nested_expression(tokens, depth + 1)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses a function call: the keyword, `(`, comma-separated arguments, `)`.
///
/// The argument count is checked against the function's arity as soon as
/// the list closes.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses or commas are malformed.
/// - `WrongArity` if the number of arguments does not match.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                             function: Function,
                             depth: usize)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = match tokens.next() {
        Some((_, position)) => *position,
        None => return Err(unexpected(&Token::Eol, 0)),
    };

    expect(tokens, &Token::LParen)?;
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_nested_expression(tokens, depth + 1),
                                          &Token::RParen)?;

    let arity = arity_of(function);
    if !arity.check(arguments.len()) {
        return Err(ParseError::WrongArity { function: function.name(),
                                            expected: arity,
                                            found:    arguments.len(), });
    }

    Ok(Expr::FunctionCall { function,
                            arguments,
                            position })
}

/// Maps a token to the builtin function it names.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Function,
///     interpreter::{lexer::Token, parser::unary::token_to_function},
/// };
///
/// assert_eq!(token_to_function(&Token::Acot), Some(Function::Acot));
/// assert_eq!(token_to_function(&Token::Deg), None);
/// ```
#[must_use]
pub const fn token_to_function(token: &Token) -> Option<Function> {
    match token {
        Token::Sqrt => Some(Function::Sqrt),
        Token::Sin => Some(Function::Sin),
        Token::Cos => Some(Function::Cos),
        Token::Tan => Some(Function::Tan),
        Token::Csc => Some(Function::Csc),
        Token::Sec => Some(Function::Sec),
        Token::Cot => Some(Function::Cot),
        Token::Asin => Some(Function::Asin),
        Token::Acos => Some(Function::Acos),
        Token::Atan => Some(Function::Atan),
        Token::Acsc => Some(Function::Acsc),
        Token::Asec => Some(Function::Asec),
        Token::Acot => Some(Function::Acot),
        Token::Mod => Some(Function::Mod),
        Token::Round => Some(Function::Round),
        Token::Floor => Some(Function::Floor),
        Token::Ceil => Some(Function::Ceil),
        Token::Fact => Some(Function::Fact),
        Token::Abs => Some(Function::Abs),
        Token::Log => Some(Function::Log),
        Token::Ln => Some(Function::Ln),
        Token::Min => Some(Function::Min),
        Token::Max => Some(Function::Max),
        Token::Rand => Some(Function::Rand),
        Token::RandInt => Some(Function::RandInt),
        Token::Root => Some(Function::Root),
        _ => None,
    }
}
