use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Zero raised to a negative power is a division by zero. A negative base
    /// with a non-integer exponent has no real value and is a domain error.
    /// Overflow yields an infinite result.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_pow(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Context::eval_pow(-2.0, 3.0).unwrap(), -8.0);
    /// assert!(Context::eval_pow(-8.0, 0.5).is_err());
    /// assert!(Context::eval_pow(0.0, -1.0).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
            return Err(EvalError::domain("^",
                                         format!("negative base {base} with fractional exponent {exponent}")));
        }
        Ok(base.powf(exponent))
    }
}
