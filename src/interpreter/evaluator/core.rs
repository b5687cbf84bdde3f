use std::collections::HashMap;

use log::debug;
use num::BigInt;

use crate::{
    ast::{Node, NodeTag, Operand},
    error::RuntimeError,
    util::num::is_decimal_literal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks trees and computes their values.
///
/// The evaluator owns the variable environment. Bindings made by one line
/// stay visible to every later line evaluated by the same evaluator; two
/// evaluators never share bindings.
///
/// ## Usage
///
/// Create one evaluator per session and feed it the trees produced by the
/// parser, one line at a time.
///
/// # Example
/// ```
/// use intcalc::{ast::Node, interpreter::evaluator::Evaluator};
/// use num::BigInt;
///
/// let mut evaluator = Evaluator::default();
/// assert_eq!(evaluator.evaluate_line(&Node::assign("x", Node::number("5"))), Ok(None));
/// assert_eq!(evaluator.variable("x"), Some(&BigInt::from(5)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    state: HashMap<String, BigInt>,
}

impl Evaluator {
    /// Creates an evaluator whose environment starts with `initial`.
    #[must_use]
    pub const fn new(initial: HashMap<String, BigInt>) -> Self {
        Self { state: initial }
    }

    /// Evaluates one parsed line.
    ///
    /// # Returns
    /// - `None` for an assignment, after binding the variable (any previous
    ///   binding is overwritten).
    /// - `Some(value)` for every other tree.
    ///
    /// # Errors
    /// - `UndefinedVariable` if the tree reads an unbound variable.
    /// - `Arithmetic` on division by zero or an unusable exponent.
    /// - `UnsupportedOperation`, `MalformedNumber`, `Tree` for trees the
    ///   parser cannot produce.
    ///
    /// The environment is left untouched when an error is returned.
    pub fn evaluate_line(&mut self, tree: &Node) -> EvalResult<Option<BigInt>> {
        if tree.tag() != NodeTag::Assign {
            let value = self.evaluate_expr(tree)?;
            debug!("evaluated {tree} to {value}");
            return Ok(Some(value));
        }

        let target = tree.first()?;
        let value = self.evaluate_expr(tree.second()?)?;
        debug!("binding {} = {value}", target.repr());
        self.state.insert(target.repr().to_string(), value);
        Ok(None)
    }

    /// Evaluates an expression tree.
    ///
    /// Assignments are only valid at the top of a line and are rejected
    /// here.
    pub(super) fn evaluate_expr(&self, tree: &Node) -> EvalResult<BigInt> {
        match tree.tag() {
            NodeTag::Operand(Operand::Number) => Self::eval_number(tree.repr()),
            NodeTag::Operand(Operand::Variable) => {
                self.state
                    .get(tree.repr())
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: tree.repr()
                                                                           .to_string() })
            },
            NodeTag::Unary(op) => {
                let operand = self.evaluate_expr(tree.first()?)?;
                Ok(Self::eval_unary(op, operand))
            },
            NodeTag::Binary(op) => {
                let left = self.evaluate_expr(tree.first()?)?;
                let right = self.evaluate_expr(tree.second()?)?;
                Self::eval_binary(op, &left, &right)
            },
            tag @ NodeTag::Assign => Err(RuntimeError::UnsupportedOperation { tag }),
        }
    }

    fn eval_number(repr: &str) -> EvalResult<BigInt> {
        if !is_decimal_literal(repr) {
            return Err(RuntimeError::MalformedNumber { repr: repr.to_string() });
        }
        repr.parse()
            .map_err(|_| RuntimeError::MalformedNumber { repr: repr.to_string() })
    }

    /// The current value of `name`, if bound.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&BigInt> {
        self.state.get(name)
    }

    /// All bindings, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        self.state.iter().map(|(name, value)| (name.as_str(), value))
    }
}
