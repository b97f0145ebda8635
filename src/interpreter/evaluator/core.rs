use std::fmt;

use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::{Command, Expr, Statement},
    error::{CalcError, EvalError},
    interpreter::{
        lexer::tokenize, mode::AngleMode, parser::core::parse_line, random::RandomSource,
    },
    util::num::format_value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// What a successfully handled line produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The line was an expression with this value.
    Value(f64),
    /// The line was `rad` or `deg`; the session now uses this mode.
    ModeChanged(AngleMode),
    /// The line was `exit`. Ending the session is up to the caller.
    Exit,
    /// The line was `help`. Showing usage text is up to the caller.
    Help,
}

impl Outcome {
    /// The numeric result, if the line was an expression.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&format_value(*v)),
            Self::ModeChanged(mode) => write!(f, "angle mode: {mode}"),
            Self::Exit => f.write_str("exit"),
            Self::Help => f.write_str("help"),
        }
    }
}

/// Stores the state of one calculator session.
///
/// The angle mode and the random source are the only state that outlives a
/// single line. Independent sessions must use independent contexts.
///
/// ## Usage
///
/// `Context` is created once and reused for every line of a session:
///
/// ```
/// use calcline::interpreter::{
///     evaluator::core::{Context, Outcome},
///     mode::AngleMode,
/// };
///
/// let mut context = Context::new();
///
/// assert_eq!(context.eval_line("2 + 3 * 4").unwrap(), Outcome::Value(14.0));
/// assert_eq!(context.eval_line("deg").unwrap(),
///            Outcome::ModeChanged(AngleMode::Degrees));
/// let sine = context.eval_line("sin(90)").unwrap().value().unwrap();
/// assert!((sine - 1.0).abs() < 1e-12);
/// assert!(context.eval_line("(2 + 3").is_err());
/// assert_eq!(context.eval_line("exit").unwrap(), Outcome::Exit);
/// ```
pub struct Context {
    /// Unit used by trigonometric functions.
    pub(crate) angle_mode: AngleMode,
    /// Generator behind `rand` and `randint`.
    pub(crate) random:     Box<dyn RandomSource>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context in radians mode with an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_random_source(StdRng::from_entropy())
    }

    /// Creates a context in radians mode drawing random numbers from
    /// `random`.
    #[must_use]
    pub fn with_random_source(random: impl RandomSource + 'static) -> Self {
        Self { angle_mode: AngleMode::default(),
               random:     Box::new(random), }
    }

    /// Returns the context with its angle mode replaced.
    #[must_use]
    pub fn with_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    /// The current angle mode.
    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Switches the angle mode. Setting the current mode again is a no-op.
    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        if self.angle_mode != mode {
            info!("angle mode changed from {} to {mode}", self.angle_mode);
        }
        self.angle_mode = mode;
    }

    /// Lexes, parses and evaluates a single input line.
    ///
    /// Either the whole line succeeds or nothing is produced; the context is
    /// only modified by a successful mode command.
    ///
    /// # Errors
    /// Returns the first lexical, syntactic or evaluation error of the line.
    pub fn eval_line(&mut self, line: &str) -> Result<Outcome, CalcError> {
        let tokens = tokenize(line)?;
        trace!("tokens: {tokens:?}");

        let statement = parse_line(&tokens)?;
        trace!("statement: {statement:?}");

        let outcome = self.eval_statement(&statement)?;
        debug!("{line:?} => {outcome}");

        Ok(outcome)
    }

    /// Executes a parsed statement.
    ///
    /// # Errors
    /// Returns an error if the expression cannot be evaluated.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Outcome> {
        match statement {
            Statement::Command(Command::Exit) => Ok(Outcome::Exit),
            Statement::Command(Command::Help) => Ok(Outcome::Help),
            Statement::Command(Command::SetMode(mode)) => {
                self.set_angle_mode(*mode);
                Ok(Outcome::ModeChanged(*mode))
            },
            Statement::Expression(expr) => Ok(Outcome::Value(self.eval(expr)?)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals, unary
    /// and binary operations, and function calls. Arguments are evaluated
    /// left to right before the function is applied.
    ///
    /// # Errors
    /// Returns an error if any operator or function rejects its operands.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::FunctionCall { function,
                                 arguments,
                                 .. } => {
                let args = arguments.iter()
                                    .map(|argument| self.eval(argument))
                                    .collect::<EvalResult<Vec<_>>>()?;
                self.eval_function(*function, &args)
            },
        }
    }
}
