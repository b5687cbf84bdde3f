use crate::{
    ast::{BinaryOperation, UnaryOperation},
    settings::SettingsBuilder,
};

/// The symbol of addition and unary plus.
pub const PLUS: &str = "+";
/// The symbol of subtraction and negation.
pub const MINUS: &str = "-";
/// The symbol of multiplication.
pub const MULT: &str = "*";
/// The symbol of division.
pub const DIV: &str = "/";
/// The symbol of exponentiation.
pub const POWER: &str = "**";

/// Returns a builder preloaded with the stock operator table.
///
/// Levels from lowest to highest precedence:
/// 1. `+`, `-` (left-associative),
/// 2. `*`, `/` (left-associative),
/// 3. `**` (right-associative).
///
/// Unary `+` and `-` form a single group.
///
/// The builder can be extended before it is built, e.g. to add another unary
/// group.
#[must_use]
pub fn default_builder() -> SettingsBuilder {
    SettingsBuilder::new().left_assoc([BinaryOperation::Plus, BinaryOperation::Minus])
                          .left_assoc([BinaryOperation::Mult, BinaryOperation::Div])
                          .right_assoc([BinaryOperation::Power])
                          .unary([UnaryOperation::Plus, UnaryOperation::Minus])
                          .binary_repr(BinaryOperation::Plus, PLUS)
                          .binary_repr(BinaryOperation::Minus, MINUS)
                          .binary_repr(BinaryOperation::Mult, MULT)
                          .binary_repr(BinaryOperation::Div, DIV)
                          .binary_repr(BinaryOperation::Power, POWER)
                          .unary_repr(UnaryOperation::Plus, PLUS)
                          .unary_repr(UnaryOperation::Minus, MINUS)
}
