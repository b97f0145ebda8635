use std::fmt;

/// Lexical errors.
///
/// Raised while splitting an input line into tokens, when a character does
/// not start any known token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching the token stream
/// against the grammar: unexpected tokens, empty lines, and function calls
/// with the wrong number of arguments.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing the value of
/// a parsed expression, such as division by zero or arguments outside a
/// function's domain.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced while handling a single input line.
///
/// Every stage of the pipeline converts into this type, so the driver can use
/// `?` across lexing, parsing and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The line contained a character that is not part of any token.
    Lex(LexError),
    /// The tokens did not form a valid statement.
    Parse(ParseError),
    /// The expression was well formed but could not be evaluated.
    Eval(EvalError),
}

impl CalcError {
    /// Short label naming the stage that failed.
    ///
    /// # Example
    /// ```
    /// use calcline::error::{CalcError, EvalError};
    ///
    /// assert_eq!(CalcError::Eval(EvalError::DivisionByZero).kind(), "evaluation error");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex error",
            Self::Parse(_) => "parse error",
            Self::Eval(_) => "evaluation error",
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{}: {e}", self.kind()),
            Self::Parse(e) => write!(f, "{}: {e}", self.kind()),
            Self::Eval(e) => write!(f, "{}: {e}", self.kind()),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
