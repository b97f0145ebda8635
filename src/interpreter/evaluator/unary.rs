use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a prefix operation on a value.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
