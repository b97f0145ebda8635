use crate::interpreter::evaluator::function::core::Arity;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// An argument lies outside the mathematically valid range of a function
    /// or operator.
    DomainError {
        /// The function or operator that rejected its input.
        function: &'static str,
        /// Details about why the argument is invalid.
        details:  String,
    },
    /// Attempted division (or remainder) by zero.
    DivisionByZero,
    /// A function node was evaluated with the wrong number of arguments.
    ///
    /// The parser rejects such calls, so this only occurs for expression
    /// trees built by hand.
    ArgumentCountMismatch {
        /// The name of the function.
        function: &'static str,
        /// The argument counts the function accepts.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
}

impl EvalError {
    /// Shorthand for building a [`EvalError::DomainError`].
    pub(crate) fn domain(function: &'static str, details: impl Into<String>) -> Self {
        Self::DomainError { function,
                            details: details.into() }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainError { function, details } => {
                write!(f, "Domain error in '{function}': {details}.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{function}' expects {expected}, but found {found}."),
        }
    }
}

impl std::error::Error for EvalError {}
