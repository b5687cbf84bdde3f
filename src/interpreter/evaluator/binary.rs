use num::{BigInt, Zero};

use crate::{
    ast::BinaryOperation,
    error::ArithmeticFault,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::checked_pow,
};

impl Evaluator {
    /// Applies a binary operation to two evaluated operands.
    ///
    /// Division truncates toward zero. Exponentiation needs a non-negative
    /// exponent and a result of bounded size.
    ///
    /// # Errors
    /// `RuntimeError::Arithmetic` wrapping the [`ArithmeticFault`] for a zero
    /// divisor, an unusable exponent or an oversized power.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::BinaryOperation, interpreter::evaluator::Evaluator};
    /// use num::BigInt;
    ///
    /// let b = BigInt::from(2);
    /// let e = BigInt::from(100);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperation::Power, &b, &e).unwrap();
    /// assert_eq!(result.to_string(), "1267650600228229401496703205376");
    ///
    /// let zero = BigInt::from(0);
    /// assert!(Evaluator::eval_binary(BinaryOperation::Div, &b, &zero).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperation, left: &BigInt, right: &BigInt) -> EvalResult<BigInt> {
        match op {
            BinaryOperation::Plus => Ok(left + right),
            BinaryOperation::Minus => Ok(left - right),
            BinaryOperation::Mult => Ok(left * right),
            BinaryOperation::Div => {
                if right.is_zero() {
                    return Err(ArithmeticFault::DivisionByZero.into());
                }
                Ok(left / right)
            },
            BinaryOperation::Power => Ok(checked_pow(left, right)?),
        }
    }
}
