use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Computes a logarithm.
///
/// - `log(x)` is the base-10 logarithm.
/// - `log(base, x)` uses an explicit base, in the same order as
///   `root(degree, value)`.
///
/// # Errors
/// Returns a domain error when `x <= 0`, or when the base is not positive or
/// equals one.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::log::log;
///
/// assert!((log(&[1000.0]).unwrap() - 3.0).abs() < 1e-12);
/// assert_eq!(log(&[2.0, 8.0]).unwrap(), 3.0);
/// assert!(log(&[0.0]).is_err());
/// assert!(log(&[1.0, 5.0]).is_err());
/// ```
pub fn log(args: &[f64]) -> EvalResult<f64> {
    match args {
        [x] => {
            check_positive("log", *x)?;
            Ok(x.log10())
        },
        [base, x] => {
            if *base <= 0.0 || *base == 1.0 {
                return Err(EvalError::domain("log",
                                             format!("base must be positive and not 1, found {base}")));
            }
            check_positive("log", *x)?;
            if *base == 10.0 {
                return Ok(x.log10());
            }
            if *base == 2.0 {
                return Ok(x.log2());
            }
            Ok(x.ln() / base.ln())
        },
        _ => Err(EvalError::domain("log", "expects 1 or 2 arguments")),
    }
}

/// Natural logarithm.
///
/// # Errors
/// Returns a domain error when the argument is not positive.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::log::ln;
///
/// assert_eq!(ln(&[1.0]).unwrap(), 0.0);
/// assert!(ln(&[-2.0]).is_err());
/// ```
pub fn ln(args: &[f64]) -> EvalResult<f64> {
    check_positive("ln", args[0])?;
    Ok(args[0].ln())
}

fn check_positive(function: &'static str, x: f64) -> EvalResult<()> {
    if x > 0.0 {
        Ok(())
    } else {
        Err(EvalError::domain(function, format!("{x} is not positive")))
    }
}
