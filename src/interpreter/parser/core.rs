use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_binary, statement::parse_statement, utils::unexpected},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply groupings, prefix minuses, argument lists and right operands
/// may nest in one line. Deeper input is rejected at the first token past
/// the limit.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete line of tokens.
///
/// The line must hold exactly one statement followed by the end-of-line
/// marker; anything after a complete statement is an unexpected token.
///
/// # Parameters
/// - `tokens`: `(Token, position)` pairs as produced by the lexer.
///
/// # Returns
/// The parsed [`Statement`].
///
/// # Example
/// ```
/// use calcline::{
///     ast::{Command, Statement},
///     error::ParseError,
///     interpreter::{lexer::tokenize, mode::AngleMode, parser::core::parse_line},
/// };
///
/// let tokens = tokenize("DEG").unwrap();
/// assert_eq!(parse_line(&tokens).unwrap(),
///            Statement::Command(Command::SetMode(AngleMode::Degrees)));
///
/// let tokens = tokenize("   ").unwrap();
/// assert_eq!(parse_line(&tokens), Err(ParseError::Empty));
///
/// let tokens = tokenize("2 + 3 4").unwrap();
/// assert_eq!(parse_line(&tokens),
///            Err(ParseError::UnexpectedToken { token:    "4".to_string(),
///                                              position: 6, }));
/// ```
pub fn parse_line(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;

    match iter.next() {
        Some((Token::Eol, _)) | None => Ok(statement),
        Some((token, position)) => Err(unexpected(token, *position)),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts the precedence
/// climb at the loosest binding tier, so every infix operator is accepted.
///
/// Grammar: `expression := binary(additive)`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_nested_expression(tokens, 0)
}

/// Parses an expression that sits `depth` levels below the top of the line.
pub(in crate::interpreter::parser) fn parse_nested_expression<'a, I>(tokens: &mut Peekable<I>,
                                                                     depth: usize)
                                                                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary(tokens, 0, depth)
}
