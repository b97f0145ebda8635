use std::fmt;

use crate::interpreter::mode::AngleMode;

/// A parsed input line.
///
/// A line is either a control command, which is handled by the driver, or a
/// single arithmetic expression to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A command such as `exit` or `deg`.
    Command(Command),
    /// An arithmetic expression.
    Expression(Expr),
}

/// Control commands. Each one must be the only token on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `exit`: ask the driver's caller to end the session.
    Exit,
    /// `help`: ask the driver's caller to show usage text.
    Help,
    /// `rad` / `deg`: switch the session's angle unit.
    SetMode(AngleMode),
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node records the byte offset of the token that introduced it, so
/// errors can point back into the input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value:    f64,
        /// Byte offset in the input line.
        position: usize,
    },
    /// A prefix operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the input line.
        position: usize,
    },
    /// A binary operation (addition, exponentiation, ...).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the input line.
        position: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// The function being called.
        function:  Function,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset of the function keyword in the input line.
        position:  usize,
    },
}

impl Expr {
    /// Returns the byte offset of the token that introduced this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Truncated remainder (`mod`).
    Mod,
    /// Exponentiation (`^`).
    Pow,
    /// N-th root (`n root x`).
    Root,
}

impl BinaryOperator {
    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Pow => "^",
            Self::Root => "root",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Built-in functions callable as `name(arguments)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    Asin,
    Acos,
    Atan,
    Acsc,
    Asec,
    Acot,
    Mod,
    Round,
    Floor,
    Ceil,
    Fact,
    Abs,
    Log,
    Ln,
    Min,
    Max,
    Rand,
    RandInt,
    Root,
}

impl Function {
    /// The keyword used to call the function.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::Function;
    ///
    /// assert_eq!(Function::RandInt.name(), "randint");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Csc => "csc",
            Self::Sec => "sec",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Acsc => "acsc",
            Self::Asec => "asec",
            Self::Acot => "acot",
            Self::Mod => "mod",
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Fact => "fact",
            Self::Abs => "abs",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Min => "min",
            Self::Max => "max",
            Self::Rand => "rand",
            Self::RandInt => "randint",
            Self::Root => "root",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
