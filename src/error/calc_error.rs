use thiserror::Error;

use crate::error::{LexError, ParseError, RuntimeError, SettingsError, TreeError};

/// The broad class of a [`CalcError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Inconsistent operator settings.
    Configuration,
    /// The line could not be split into tokens.
    Lexical,
    /// The tokens do not form a valid line.
    Syntax,
    /// A tree does not have the shape its tags promise.
    Structure,
    /// The tree could not be evaluated.
    Evaluation,
}

/// Any failure produced while processing a line.
///
/// Nested errors are flattened on conversion, so a lexical error raised
/// through the parser ends up as [`CalcError::Lex`] rather than
/// `CalcError::Parse(ParseError::Lex(..))`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Settings(SettingsError),
    #[error(transparent)]
    Lex(LexError),
    #[error(transparent)]
    Parse(ParseError),
    #[error(transparent)]
    Tree(TreeError),
    #[error(transparent)]
    Runtime(RuntimeError),
}

impl CalcError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Settings(_) => ErrorCategory::Configuration,
            Self::Lex(_) => ErrorCategory::Lexical,
            Self::Parse(_) => ErrorCategory::Syntax,
            Self::Tree(_) => ErrorCategory::Structure,
            Self::Runtime(_) => ErrorCategory::Evaluation,
        }
    }

    /// Whether the error points at a bug in the settings, the parser or the
    /// evaluator rather than at the line being processed.
    ///
    /// # Example
    /// ```
    /// use intcalc::error::{CalcError, RuntimeError, SettingsError};
    ///
    /// let user = CalcError::from(RuntimeError::UndefinedVariable { name: "y".into() });
    /// assert!(!user.is_defect());
    ///
    /// let defect = CalcError::from(SettingsError::NoUnaryOperation { repr: "*".into() });
    /// assert!(defect.is_defect());
    /// ```
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self,
                 Self::Settings(_)
                 | Self::Tree(_)
                 | Self::Lex(LexError::NoTokenYet | LexError::RollbackMisuse)
                 | Self::Runtime(RuntimeError::UnsupportedOperation { .. }
                                 | RuntimeError::MalformedNumber { .. }))
    }
}

impl From<SettingsError> for CalcError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

impl From<LexError> for CalcError {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<TreeError> for CalcError {
    fn from(err: TreeError) -> Self {
        Self::Tree(err)
    }
}

impl From<ParseError> for CalcError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(err) => Self::Lex(err),
            ParseError::Settings(err) => Self::Settings(err),
            err => Self::Parse(err),
        }
    }
}

impl From<RuntimeError> for CalcError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Tree(err) => Self::Tree(err),
            err => Self::Runtime(err),
        }
    }
}
