/// Parser state and the expression entry point.
///
/// Declares [`core::Parser`], which owns the push-back token source and the
/// parser view of the operator settings.
pub mod core;

/// Precedence levels.
///
/// Parses one binary precedence level at a time, recursing into the next
/// tighter level for operands. Associativity decides whether a level loops
/// (left) or recurses into itself (right).
pub mod level;

/// Operands.
///
/// Parses numbers, variables, parenthesized sub-expressions and unary
/// operations.
pub mod factor;

/// Whole lines.
///
/// Parses `let` declarations and bare expressions, and rejects trailing
/// input.
pub mod statement;

pub use self::core::{ParseResult, Parser};
