use crate::interpreter::evaluator::function::core::Arity;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a line.
pub enum ParseError {
    /// Found a token that no grammar rule accepts at this point. This covers
    /// missing operands, unbalanced parentheses, commands used inside an
    /// expression and tokens trailing a complete expression.
    UnexpectedToken {
        /// The token encountered, rendered as source text.
        token:    String,
        /// Byte offset of the token within the line.
        position: usize,
    },
    /// The line contained no tokens.
    Empty,
    /// A function was called with the wrong number of arguments.
    WrongArity {
        /// The name of the function.
        function: &'static str,
        /// The argument counts the function accepts.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },

            Self::Empty => write!(f, "Empty input."),

            Self::WrongArity { function,
                               expected,
                               found, } => write!(f,
                                                  "Function '{function}' expects {expected}, but found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
