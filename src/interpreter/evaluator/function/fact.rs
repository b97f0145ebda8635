use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, util::num::is_integral};

/// Largest argument whose factorial is finite in `f64`.
pub const MAX_FACTORIAL_ARGUMENT: f64 = 170.0;

/// Computes the factorial of a non-negative integer-valued argument.
///
/// # Errors
/// Returns a domain error for negative or fractional arguments, and for
/// arguments whose factorial exceeds the `f64` range.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::fact::fact;
///
/// assert_eq!(fact(&[5.0]).unwrap(), 120.0);
/// assert_eq!(fact(&[0.0]).unwrap(), 1.0);
/// assert!(fact(&[-3.0]).is_err());
/// assert!(fact(&[2.5]).is_err());
/// ```
pub fn fact(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];

    if !is_integral(x) {
        return Err(EvalError::domain("fact", format!("{x} is not an integer")));
    }
    if x < 0.0 {
        return Err(EvalError::domain("fact", format!("{x} is negative")));
    }
    if x > MAX_FACTORIAL_ARGUMENT {
        return Err(EvalError::domain("fact", format!("{x}! is too large")));
    }

    let mut result = 1.0;
    let mut current = 2.0;
    while current <= x {
        result *= current;
        current += 1.0;
    }
    Ok(result)
}
