use thiserror::Error;

/// Represents an inconsistency in the operator settings.
///
/// Most of these are detected when the settings are built; the lookup
/// variants can still surface later if a symbol is resolved against the
/// wrong operation kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No binary operation is registered under the symbol.
    #[error("something wrong with settings: no binary operation for representation '{repr}'")]
    NoBinaryOperation {
        /// The symbol that was looked up.
        repr: String,
    },
    /// No unary operation is registered under the symbol.
    #[error("something wrong with settings: no unary operation for representation '{repr}'")]
    NoUnaryOperation {
        /// The symbol that was looked up.
        repr: String,
    },
    /// The symbol names a unary operation that was never given a priority.
    #[error("something wrong with settings: no priority for '{repr}' that is specified as unary operation")]
    NoUnaryPriority {
        /// The symbol of the unary operation.
        repr: String,
    },
    /// An operation takes part in parsing but has no symbol.
    #[error("something wrong with settings: no representation for {kind} operation {operation}")]
    MissingMnemonic {
        /// `binary` or `unary`.
        kind:      &'static str,
        /// The operation lacking a symbol.
        operation: String,
    },
    /// An operation was given two different symbols.
    #[error("something wrong with settings: {kind} operation {operation} is represented both as '{first}' and '{second}'")]
    ConflictingMnemonics {
        /// `binary` or `unary`.
        kind:      &'static str,
        /// The operation.
        operation: String,
        /// The symbol registered first.
        first:     String,
        /// The symbol registered later.
        second:    String,
    },
    /// Two operations of the same kind share one symbol.
    #[error("something wrong with settings: '{repr}' represents more than one {kind} operation")]
    DuplicateMnemonic {
        /// `binary` or `unary`.
        kind: &'static str,
        /// The shared symbol.
        repr: String,
    },
    /// An operation was registered in more than one precedence level or
    /// unary group.
    #[error("something wrong with settings: {kind} operation {operation} is registered more than once")]
    DuplicateRegistration {
        /// `binary` or `unary`.
        kind:      &'static str,
        /// The operation.
        operation: String,
    },
    /// The symbol cannot be produced by the tokenizer: it is empty or
    /// contains spaces, letters, digits, or one of `(`, `)`, `=`.
    #[error("something wrong with settings: '{repr}' cannot be used as an operation symbol")]
    UnlexableMnemonic {
        /// The rejected symbol.
        repr: String,
    },
}
