use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::sqrt::nth_root,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators (`+`, `-`, `*`, `/`, `mod`) are handled by
    /// `eval_scalar_op`, `^` by `eval_pow` and infix `root` by the n-th root
    /// function. A result that is not a number (for example `inf - inf`) is
    /// reported as a domain error of the operator rather than returned.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Add, 3.0, 4.0).unwrap(), 7.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Root, 3.0, 27.0).unwrap(), 3.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Root, Sub};

        let result = match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right)?,
            Pow => Self::eval_pow(left, right)?,
            Root => nth_root(left, right)?,
        };

        if result.is_nan() {
            return Err(EvalError::domain(op.symbol(),
                                         format!("{left} {op} {right} is not a real number")));
        }

        Ok(result)
    }
}
