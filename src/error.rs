/// Operator settings errors.
///
/// Raised when an operator table is inconsistent: an operation without a
/// mnemonic, a symbol registered twice, or a lookup the table cannot answer.
/// These always indicate a configuration bug, never bad user input.
pub mod settings_error;
/// Lexical errors.
///
/// Defines the errors the tokenizer raises while splitting a line into
/// tokens: unknown characters, unknown operator symbols, digits glued to
/// letters and reads past the end of the line.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all syntax errors raised while building a tree from tokens, such
/// as unexpected tokens, unbalanced parentheses, malformed declarations and
/// trailing input.
pub mod parse_error;
/// Tree shape errors.
///
/// Raised when a node is asked for a child it does not have.
pub mod tree_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables and arithmetic faults.
pub mod runtime_error;
/// The error type returned by the line-oriented entry points.
pub mod calc_error;

pub use calc_error::{CalcError, ErrorCategory};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{ArithmeticFault, RuntimeError};
pub use settings_error::SettingsError;
pub use tree_error::{ChildPosition, TreeError};
