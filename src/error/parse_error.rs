use thiserror::Error;

use crate::error::{LexError, SettingsError};

/// Represents all errors that can occur while parsing a line.
///
/// Lexical and settings failures met while parsing are carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The operator settings could not answer a lookup.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Found a token that cannot start an operand.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// The line ended where an operand was expected.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("closing parenthesis expected, found {found}")]
    ExpectedClosingParen {
        /// The token found instead.
        found: String,
    },
    /// A `let` declaration without the variable name.
    #[error("malformed declaration: 'let' keyword must be followed by variable name, found {found}")]
    MissingDeclarationName {
        /// The token found instead.
        found: String,
    },
    /// A `let` declaration without `=` after the name.
    #[error("malformed declaration: assignment missing after '{name}', found {found}")]
    MissingDeclarationAssign {
        /// The declared name.
        name:  String,
        /// The token found instead.
        found: String,
    },
    /// Found extra tokens after a complete expression.
    #[error("some junk after expression found: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
}
