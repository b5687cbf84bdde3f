use thiserror::Error;

use crate::{ast::NodeTag, error::TreeError};

/// The arithmetic fault behind a [`RuntimeError::Arithmetic`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticFault {
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative exponent {exponent}")]
    NegativeExponent {
        /// The exponent, in decimal.
        exponent: String,
    },
    #[error("exponent {exponent} is too large")]
    ExponentTooLarge {
        /// The exponent, in decimal.
        exponent: String,
    },
    /// The result would need more than [`MAX_RESULT_BITS`] bits.
    ///
    /// [`MAX_RESULT_BITS`]: crate::util::num::MAX_RESULT_BITS
    #[error("result of raising a {bits}-bit number to the power {exponent} is too large")]
    ResultTooLarge {
        /// The bit length of the base.
        bits:     u64,
        /// The exponent, in decimal.
        exponent: String,
    },
}

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that was never bound.
    #[error("execution problem: undefined variable {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// An arithmetic operation could not produce a value.
    #[error("execution problem: arithmetic exception happened")]
    Arithmetic {
        /// The underlying fault.
        #[source]
        source: ArithmeticFault,
    },
    /// The tag cannot be evaluated in this position.
    #[error("execution problem: not supported operation: {tag}")]
    UnsupportedOperation {
        /// The tag of the offending node.
        tag: NodeTag,
    },
    /// A number leaf whose representation is not a decimal integer.
    #[error("execution problem: '{repr}' is not a decimal integer")]
    MalformedNumber {
        /// The representation of the leaf.
        repr: String,
    },
    /// The tree does not have the shape its tags promise.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl From<ArithmeticFault> for RuntimeError {
    fn from(source: ArithmeticFault) -> Self {
        Self::Arithmetic { source }
    }
}
