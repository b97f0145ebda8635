use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Binding strength of the additive tier (`+`, `-`).
pub const ADDITIVE: u8 = 1;
/// Binding strength of the multiplicative tier (`*`, `/`, `mod`).
pub const MULTIPLICATIVE: u8 = 2;
/// Binding strength of the exponent tier (`^`, `root`).
pub const EXPONENT: u8 = 3;

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The precedence table.
///
/// | Tier             | Operators         | Associativity |
/// |------------------|-------------------|---------------|
/// | `ADDITIVE`       | `+` `-`           | left          |
/// | `MULTIPLICATIVE` | `*` `/` `mod`     | left          |
/// | `EXPONENT`       | `^` `root`        | right         |
///
/// Prefix minus and function application bind tighter than every tier, and
/// parentheses and argument lists tighter still (see
/// [`parse_unary`](crate::interpreter::parser::unary::parse_unary)).
///
/// # Example
/// ```
/// use calcline::{
///     ast::BinaryOperator,
///     interpreter::parser::binary::{Associativity, EXPONENT, binding_power},
/// };
///
/// assert_eq!(binding_power(BinaryOperator::Pow), (EXPONENT, Associativity::Right));
/// ```
#[must_use]
pub const fn binding_power(op: BinaryOperator) -> (u8, Associativity) {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => (ADDITIVE, Associativity::Left),
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => {
            (MULTIPLICATIVE, Associativity::Left)
        },
        BinaryOperator::Pow | BinaryOperator::Root => (EXPONENT, Associativity::Right),
    }
}

/// Parses a chain of binary operators by precedence climbing.
///
/// Operands come from [`parse_unary`]. An operator is consumed only if its
/// tier is at least `min_precedence`; its right operand is then parsed with
/// the tier raised by one for left-associative operators, or kept for
/// right-associative ones. An operator of a looser tier ends the chain and is
/// left for the caller.
///
/// The rule is:
/// `binary(p) := unary (op binary(p'))*` where `tier(op) >= p`.
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `min_precedence`: Loosest tier this call may consume.
/// - `depth`: Nesting depth of this chain; right operands sit one deeper.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the single operand if no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;

    while let Some((token, position)) = tokens.peek() {
        let Some(op) = token_to_binary_operator(token) else {
            break;
        };

        let (precedence, associativity) = binding_power(op);
        if precedence < min_precedence {
            break;
        }

        let position = *position;
        tokens.next(); // consume operator

        let next_min = match associativity {
            Associativity::Left => precedence + 1,
            Associativity::Right => precedence,
        };
        let right = parse_binary(tokens, next_min, depth + 1)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token can appear between two
/// operands (`+`, `-`, `*`, `/`, `^`, `mod`, `root`), otherwise `None`.
/// `mod` and `root` are also function keywords; which role they play is
/// decided by position.
///
/// # Example
/// ```
/// use calcline::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Mod),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Sin), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Mod => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Root => Some(BinaryOperator::Root),
        _ => None,
    }
}
