use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// `rand()`: a value uniformly distributed in `[0, 1)`.
pub fn rand(_args: &[f64], context: &mut Context) -> EvalResult<f64> {
    Ok(context.random.next_unit())
}

/// `randint(low, high)`: an integer drawn uniformly from
/// `[ceil(low), floor(high)]`.
///
/// # Errors
/// Returns a domain error when `low > high`, when the interval holds no
/// integer, or when a bound exceeds the exactly representable integer range.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::{core::Context, function::random::randint};
///
/// let mut context = Context::new();
///
/// let n = randint(&[1.0, 6.0], &mut context).unwrap();
/// assert!((1.0..=6.0).contains(&n) && n.fract() == 0.0);
///
/// assert!(randint(&[6.0, 1.0], &mut context).is_err());
/// assert!(randint(&[1.2, 1.8], &mut context).is_err());
/// ```
pub fn randint(args: &[f64], context: &mut Context) -> EvalResult<f64> {
    let (low, high) = (args[0], args[1]);
    if low > high {
        return Err(EvalError::domain("randint",
                                     format!("low bound {low} exceeds high bound {high}")));
    }

    let out_of_range = || EvalError::domain("randint", "bounds must be finite integers");
    let low_int = f64_to_i64_checked(low.ceil(), out_of_range())?;
    let high_int = f64_to_i64_checked(high.floor(), out_of_range())?;
    if low_int > high_int {
        return Err(EvalError::domain("randint",
                                     format!("no integer lies between {low} and {high}")));
    }

    let n = context.random.next_in_range(low_int, high_int);
    i64_to_f64_checked(n, out_of_range())
}
