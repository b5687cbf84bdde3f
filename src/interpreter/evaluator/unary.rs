use num::BigInt;

use crate::{ast::UnaryOperation, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Applies a unary operation to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::UnaryOperation, interpreter::evaluator::Evaluator};
    /// use num::BigInt;
    ///
    /// let v = Evaluator::eval_unary(UnaryOperation::Minus, BigInt::from(5));
    /// assert_eq!(v, BigInt::from(-5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperation, operand: BigInt) -> BigInt {
        match op {
            UnaryOperation::Minus => -operand,
            UnaryOperation::Plus => operand,
        }
    }
}
