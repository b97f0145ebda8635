/// Builtin lookup table, arity checking and dispatch.
pub mod core;

/// Miscellaneous builtins: `abs` and `mod`.
pub mod builtin;
/// `fact`: factorial of non-negative integers.
pub mod fact;
/// `log` and `ln`.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two arguments.
pub mod min_max;
/// `rand` and `randint`.
///
/// Both draw from the context's injectable random source.
pub mod random;
/// Rounding functions: `round`, `floor` and `ceil`.
pub mod round;
/// Square roots and n-th roots.
///
/// Implements `sqrt`, `root(degree, value)` and the infix `root` operator.
pub mod sqrt;
/// Trigonometric and inverse trigonometric functions.
///
/// All of them honour the context's angle mode.
pub mod trig;
