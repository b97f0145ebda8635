/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Number of decimal places shown by [`format_value`].
pub const DISPLAY_DECIMALS: usize = 12;

/// Values at or above this magnitude are shown in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e16;

/// Returns `true` if `value` is finite and has no fractional part.
///
/// # Example
/// ```
/// use calcline::util::num::is_integral;
///
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use calcline::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is integral and within the
/// exactly representable range.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use calcline::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, ()).unwrap(), 1000);
/// assert!(f64_to_i64_checked(1.5, ()).is_err());
/// assert!(f64_to_i64_checked(1e20, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !is_integral(value) || value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Safely converts an `f64` to `i32` if the value is integral and fits.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use calcline::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-2.0, ()).unwrap(), -2);
/// assert!(f64_to_i32_checked(0.5, ()).is_err());
/// assert!(f64_to_i32_checked(1e10, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_checked<E>(value: f64, error: E) -> Result<i32, E> {
    if !is_integral(value) || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(error);
    }
    Ok(value as i32)
}

/// Renders a result for display.
///
/// Values are rounded to [`DISPLAY_DECIMALS`] decimal places with trailing
/// zeros trimmed, so representation noise such as `sin(180°) = 1.2e-16`
/// prints as `0`. Negative zero prints as `0`, very large magnitudes use
/// scientific notation, and infinities print as `inf` / `-inf`.
///
/// ## Example
/// ```
/// use calcline::util::num::format_value;
///
/// assert_eq!(format_value(14.0), "14");
/// assert_eq!(format_value(0.1 + 0.2), "0.3");
/// assert_eq!(format_value(-0.0), "0");
/// assert_eq!(format_value(1.2246467991473532e-16), "0");
/// assert_eq!(format_value(-2.5), "-2.5");
/// assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
/// assert_eq!(format_value(2e20), "2e20");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        return format!("{value:e}");
    }

    let fixed = format!("{value:.prec$}", prec = DISPLAY_DECIMALS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
