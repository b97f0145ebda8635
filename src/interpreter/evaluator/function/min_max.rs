/// Applies `op` (`f64::min` or `f64::max`) to the two arguments.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::min_max::min_max;
///
/// assert_eq!(min_max(f64::min, &[3.0, 7.0]), 3.0);
/// assert_eq!(min_max(f64::max, &[2.5, 1.0]), 2.5);
/// ```
#[must_use]
pub fn min_max(op: fn(f64, f64) -> f64, args: &[f64]) -> f64 {
    op(args[0], args[1])
}
