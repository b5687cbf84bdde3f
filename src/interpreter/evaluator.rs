/// Evaluation entry points and the variable environment.
///
/// Holds the [`core::Evaluator`] state and dispatches on node tags.
pub mod core;

/// Unary operation evaluation.
pub mod unary;

/// Binary operation evaluation.
///
/// Implements the arithmetic behind every binary operation, including the
/// faults division and exponentiation can raise.
pub mod binary;

pub use self::core::{EvalResult, Evaluator};
