use std::fmt;

use crate::{
    ast::Function,
    error::EvalError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::{builtin, fact, log, min_max, random, round, sqrt, trig},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument values and the session context
/// (for the angle mode and the random source). Arity has already been checked
/// when a handler runs.
type BuiltinFn = fn(&[f64], &mut Context) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::OneOf(&[1, 2]).check(2));
    /// assert!(!Arity::Exact(0).check(1));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn plural(n: usize) -> &'static str {
            if n == 1 { "argument" } else { "arguments" }
        }

        match self {
            Self::Exact(n) => write!(f, "{n} {}", plural(*n)),
            Self::OneOf(counts) => {
                let last = counts.last().copied().unwrap_or(0);
                for (index, count) in counts.iter().enumerate() {
                    if index > 0 {
                        let sep = if index + 1 == counts.len() { " or " } else { ", " };
                        f.write_str(sep)?;
                    }
                    write!(f, "{count}")?;
                }
                write!(f, " {}", plural(last))
            },
        }
    }
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - the [`Function`] it implements,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BuiltinDef` (internal metadata) and `BUILTIN_TABLE`
/// (static table for lookup), plus the public list `BUILTIN_FUNCTIONS`.
macro_rules! builtin_functions {
    (
        $(
            $function:path => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            function: Function,
            arity:    Arity,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { function: $function, arity: $arity, func: $func },
            )*
        ];
        /// Every builtin function, in the order they are listed in help text.
        pub const BUILTIN_FUNCTIONS: &[Function] = &[
            $($function,)*
        ];
    };
}

builtin_functions! {
    Function::Sqrt    => { arity: Arity::Exact(1), func: |args, _| sqrt::sqrt(args) },
    Function::Root    => { arity: Arity::Exact(2), func: |args, _| sqrt::root(args) },
    Function::Sin     => { arity: Arity::Exact(1), func: trig::sin },
    Function::Cos     => { arity: Arity::Exact(1), func: trig::cos },
    Function::Tan     => { arity: Arity::Exact(1), func: trig::tan },
    Function::Csc     => { arity: Arity::Exact(1), func: trig::csc },
    Function::Sec     => { arity: Arity::Exact(1), func: trig::sec },
    Function::Cot     => { arity: Arity::Exact(1), func: trig::cot },
    Function::Asin    => { arity: Arity::Exact(1), func: trig::asin },
    Function::Acos    => { arity: Arity::Exact(1), func: trig::acos },
    Function::Atan    => { arity: Arity::Exact(1), func: trig::atan },
    Function::Acsc    => { arity: Arity::Exact(1), func: trig::acsc },
    Function::Asec    => { arity: Arity::Exact(1), func: trig::asec },
    Function::Acot    => { arity: Arity::Exact(1), func: trig::acot },
    Function::Log     => { arity: Arity::OneOf(&[1, 2]), func: |args, _| log::log(args) },
    Function::Ln      => { arity: Arity::Exact(1), func: |args, _| log::ln(args) },
    Function::Round   => { arity: Arity::OneOf(&[1, 2]), func: |args, _| round::round(args) },
    Function::Floor   => { arity: Arity::Exact(1), func: |args, _| Ok(round::unary_round(f64::floor, args)) },
    Function::Ceil    => { arity: Arity::Exact(1), func: |args, _| Ok(round::unary_round(f64::ceil, args)) },
    Function::Fact    => { arity: Arity::Exact(1), func: |args, _| fact::fact(args) },
    Function::Abs     => { arity: Arity::Exact(1), func: |args, _| Ok(builtin::abs(args)) },
    Function::Mod     => { arity: Arity::Exact(2), func: |args, _| builtin::modulo(args) },
    Function::Min     => { arity: Arity::Exact(2), func: |args, _| Ok(min_max::min_max(f64::min, args)) },
    Function::Max     => { arity: Arity::Exact(2), func: |args, _| Ok(min_max::min_max(f64::max, args)) },
    Function::Rand    => { arity: Arity::Exact(0), func: random::rand },
    Function::RandInt => { arity: Arity::Exact(2), func: random::randint },
}

/// Looks up the arity of a builtin.
///
/// Used by the parser to reject calls with the wrong number of arguments as
/// soon as their argument list closes.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Function,
///     interpreter::evaluator::function::core::{Arity, arity_of},
/// };
///
/// assert_eq!(arity_of(Function::Rand), Arity::Exact(0));
/// assert_eq!(arity_of(Function::Round), Arity::OneOf(&[1, 2]));
/// ```
#[must_use]
pub fn arity_of(function: Function) -> Arity {
    lookup(function).arity
}

fn lookup(function: Function) -> &'static BuiltinDef {
    BUILTIN_TABLE.iter()
                 .find(|b| b.function == function)
                 .unwrap_or_else(|| unreachable!("builtin table covers every function"))
}

impl Context {
    /// Evaluates a function call on already-evaluated arguments.
    ///
    /// The arity is verified again before the builtin runs, so expression
    /// trees built by hand cannot index past the argument slice. A builtin
    /// result that is not a number is reported as a domain error.
    ///
    /// # Parameters
    /// - `function`: The function to call.
    /// - `args`: Evaluated argument values.
    ///
    /// # Returns
    /// The function result or an error if the arity or domain check fails.
    pub(crate) fn eval_function(&mut self, function: Function, args: &[f64]) -> EvalResult<f64> {
        let builtin = lookup(function);
        if !builtin.arity.check(args.len()) {
            return Err(EvalError::ArgumentCountMismatch { function: function.name(),
                                                          expected: builtin.arity,
                                                          found:    args.len(), });
        }

        let result = (builtin.func)(args, self)?;
        if result.is_nan() {
            return Err(EvalError::domain(function.name(), "result is not a real number"));
        }
        Ok(result)
    }
}
