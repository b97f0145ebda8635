use crate::interpreter::evaluator::{binary::scalar::remainder, core::EvalResult};

/// Absolute value of the single argument.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::builtin::abs;
///
/// assert_eq!(abs(&[-4.5]), 4.5);
/// ```
#[must_use]
pub fn abs(args: &[f64]) -> f64 {
    args[0].abs()
}

/// `mod(a, b)`: truncated remainder of `a / b`, identical to the infix
/// `a mod b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::builtin::modulo;
///
/// assert_eq!(modulo(&[7.0, 3.0]).unwrap(), 1.0);
/// assert!(modulo(&[7.0, 0.0]).is_err());
/// ```
pub fn modulo(args: &[f64]) -> EvalResult<f64> {
    remainder(args[0], args[1])
}
