use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_i32_checked,
};

/// Rounds to the nearest integer, or to a number of decimal places.
///
/// Ties are resolved away from zero: `round(2.5)` is `3` and `round(-2.5)` is
/// `-3`. With a second argument the value is rounded to that many decimal
/// places; a negative count rounds to tens, hundreds, and so on. Counts
/// beyond the range of `f64` round every finite value to zero, or leave it
/// unchanged when positive. `round(x, 0)` always equals `round(x)`.
///
/// # Errors
/// Returns a domain error when the digit count is not an integer.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::round::round;
///
/// assert_eq!(round(&[2.5]).unwrap(), 3.0);
/// assert_eq!(round(&[2.5, 0.0]).unwrap(), 3.0);
/// assert_eq!(round(&[1234.0, -2.0]).unwrap(), 1200.0);
/// assert_eq!(round(&[5.0, -400.0]).unwrap(), 0.0);
/// assert!(round(&[1.0, 0.5]).is_err());
/// ```
pub fn round(args: &[f64]) -> EvalResult<f64> {
    let x = args[0];
    let digits = match args.get(1) {
        Some(digits) => {
            let error = EvalError::domain("round",
                                          format!("digit count must be an integer, found {digits}"));
            f64_to_i32_checked(*digits, error)?
        },
        None => 0,
    };

    if digits == 0 || !x.is_finite() {
        return Ok(x.round());
    }

    if digits < 0 {
        let factor = 10f64.powi(digits.saturating_neg());
        if factor.is_infinite() {
            return Ok(0f64.copysign(x));
        }
        return Ok((x / factor).round() * factor);
    }

    let scale = 10f64.powi(digits);
    let scaled = x * scale;
    if !scaled.is_finite() {
        // Beyond f64 resolution at this many digits; nothing to round.
        return Ok(x);
    }
    Ok(scaled.round() / scale)
}

/// Applies a whole-number rounding operation (`floor` or `ceil`) to the
/// single argument.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::round::unary_round;
///
/// assert_eq!(unary_round(f64::floor, &[3.8]), 3.0);
/// assert_eq!(unary_round(f64::ceil, &[-3.8]), -3.0);
/// ```
#[must_use]
pub fn unary_round(op: fn(f64) -> f64, args: &[f64]) -> f64 {
    op(args[0])
}
