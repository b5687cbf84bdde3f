use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A token was requested after the end of the line was already reported.
    #[error("junk unexpected stuff: '{rest}'")]
    TrailingInput {
        /// Whatever text remained unconsumed.
        rest: String,
    },
    /// A run of digits was immediately followed by a letter, e.g. `12ab`.
    #[error("number merged with identifier: '{text}'")]
    NumberMergedWithIdentifier {
        /// The digits together with the first letter following them.
        text: String,
    },
    /// A run of operator characters that is not a configured symbol.
    #[error("illegal operation: '{repr}'")]
    IllegalOperation {
        /// The maximal run of operator characters.
        repr: String,
    },
    /// A character that starts no token.
    #[error("unexpected input: '{rest}'")]
    UnexpectedCharacter {
        /// The unconsumed text, starting at the offending character.
        rest: String,
    },
    /// The last token was requested before any token was produced.
    #[error("no token has been read since the last reset")]
    NoTokenYet,
    /// `push_back` was called without a preceding read, or twice in a row.
    #[error("token push-back requested without a token to re-read")]
    RollbackMisuse,
}
