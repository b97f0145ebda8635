use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::is_integral,
};

/// Computes the square root of a non-negative value.
///
/// # Errors
/// Returns a domain error for negative arguments.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(&[16.0]).unwrap(), 4.0);
/// assert!(sqrt(&[-1.0]).is_err());
/// ```
pub fn sqrt(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    if x < 0.0 {
        return Err(EvalError::domain("sqrt", format!("{x} is negative")));
    }
    Ok(x.sqrt())
}

/// `root(degree, value)`: the `degree`-th root of `value`.
///
/// # Errors
/// See [`nth_root`].
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::sqrt::root;
///
/// assert_eq!(root(&[3.0, -27.0]).unwrap(), -3.0);
/// ```
pub fn root(args: &[f64]) -> EvalResult<f64> {
    nth_root(args[0], args[1])
}

/// Computes the n-th root `radicand^(1 / degree)`.
///
/// A negative radicand only has a real root for odd integer degrees; the
/// result is then negative. Degree zero is rejected, as is a zero radicand
/// under a negative degree.
///
/// # Errors
/// Returns a domain error when no real root exists.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::sqrt::nth_root;
///
/// assert_eq!(nth_root(4.0, 16.0).unwrap(), 2.0);
/// assert!(nth_root(2.0, -16.0).is_err());
/// assert!(nth_root(0.0, 5.0).is_err());
/// ```
pub fn nth_root(degree: f64, radicand: f64) -> EvalResult<f64> {
    if degree == 0.0 {
        return Err(EvalError::domain("root", "degree must not be zero"));
    }
    if radicand == 0.0 && degree < 0.0 {
        return Err(EvalError::domain("root", format!("0 has no root of negative degree {degree}")));
    }

    if radicand < 0.0 {
        let odd_integer = is_integral(degree) && degree % 2.0 != 0.0;
        if !odd_integer {
            return Err(EvalError::domain("root",
                                         format!("negative radicand {radicand} needs an odd integer degree, found {degree}")));
        }
        return Ok(-principal_root(degree, -radicand));
    }

    Ok(principal_root(degree, radicand))
}

/// Root of a non-negative radicand, exact for square and cube roots.
fn principal_root(degree: f64, radicand: f64) -> f64 {
    if degree == 2.0 {
        radicand.sqrt()
    } else if degree == 3.0 {
        radicand.cbrt()
    } else {
        radicand.powf(degree.recip())
    }
}
