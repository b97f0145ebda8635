use rand::{Rng, rngs::StdRng};

/// Source of randomness for `rand()` and `randint(low, high)`.
///
/// Evaluation contexts own a boxed source, so tests can inject a seeded
/// generator or a stub with fixed answers.
///
/// # Example
/// ```
/// use calcline::interpreter::{evaluator::core::Context, random::RandomSource};
///
/// struct Fixed;
///
/// impl RandomSource for Fixed {
///     fn next_unit(&mut self) -> f64 {
///         0.25
///     }
///
///     fn next_in_range(&mut self, low: i64, _high: i64) -> i64 {
///         low
///     }
/// }
///
/// let mut context = Context::with_random_source(Fixed);
/// assert_eq!(context.eval_line("rand()").unwrap().value(), Some(0.25));
/// assert_eq!(context.eval_line("randint(3, 9)").unwrap().value(), Some(3.0));
/// ```
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns an integer uniformly distributed in `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }
}
