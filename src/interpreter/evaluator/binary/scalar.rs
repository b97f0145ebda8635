use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an arithmetic operation on two scalars.
    ///
    /// Division and remainder by zero fail with `DivisionByZero`. The
    /// remainder is truncated: its sign follows the dividend, so
    /// `-7 mod 3` is `-1`.
    ///
    /// # Parameters
    /// - `op`: One of `+`, `-`, `*`, `/` or `mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0).unwrap(), -1.0);
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, 7.0, 2.0).unwrap(), 3.5);
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOperator::Mod => remainder(left, right),
            BinaryOperator::Pow | BinaryOperator::Root => {
                Err(EvalError::domain(op.symbol(), "not a scalar arithmetic operator"))
            },
        }
    }
}

/// Truncated remainder of `left / right`, shared by infix `mod` and
/// `mod(a, b)`.
///
/// # Errors
/// Returns `DivisionByZero` when `right` is zero.
pub fn remainder(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left % right)
}
