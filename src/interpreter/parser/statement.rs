use std::iter::Peekable;

use crate::{
    ast::{Command, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        mode::AngleMode,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a control command (`exit`, `help`, `rad`, `deg`), which must be the
///   first token of the line,
/// - an expression.
///
/// A line holding nothing but the end-of-line marker is rejected with
/// [`ParseError::Empty`]. Whether anything follows the statement is checked
/// by the caller.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, _)) = tokens.peek() else {
        return Err(ParseError::Empty);
    };

    if *token == Token::Eol {
        return Err(ParseError::Empty);
    }

    if let Some(command) = token_to_command(token) {
        tokens.next();
        return Ok(Statement::Command(command));
    }

    Ok(Statement::Expression(parse_expression(tokens)?))
}

/// Maps a token to the control command it introduces.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Command,
///     interpreter::{lexer::Token, mode::AngleMode, parser::statement::token_to_command},
/// };
///
/// assert_eq!(token_to_command(&Token::Rad),
///            Some(Command::SetMode(AngleMode::Radians)));
/// assert_eq!(token_to_command(&Token::Sin), None);
/// ```
#[must_use]
pub const fn token_to_command(token: &Token) -> Option<Command> {
    match token {
        Token::Exit => Some(Command::Exit),
        Token::Help => Some(Command::Help),
        Token::Rad => Some(Command::SetMode(AngleMode::Radians)),
        Token::Deg => Some(Command::SetMode(AngleMode::Degrees)),
        _ => None,
    }
}
