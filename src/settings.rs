use std::sync::Arc;

use crate::error::SettingsError;

/// Associativity of a precedence level.
pub mod associativity;
/// Accumulates operator registrations and freezes them into [`Settings`].
///
/// The builder is the only way to describe a custom operator table: binary
/// precedence levels from lowest to highest, unary groups from loosest to
/// tightest, and the symbol of every operation.
pub mod builder;
/// The stock operator table.
pub mod defaults;
/// The read-only view consulted by the tokenizer.
pub mod lexer_view;
/// The read-only view consulted by the parser.
///
/// Answers every precedence and associativity question the parser asks, and
/// resolves symbols back to operations.
pub mod parser_view;

pub use associativity::Associativity;
pub use builder::SettingsBuilder;
pub use lexer_view::LexerSettings;
pub use parser_view::ParserSettings;

/// Result type used by settings lookups.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// A frozen operator table.
///
/// `Settings` is built once, by [`SettingsBuilder::build`] or
/// [`Settings::default`], and then shared by atomic reference counting between the
/// tokenizers and parsers that use it.
#[derive(Debug, Clone)]
pub struct Settings {
    parser: Arc<ParserSettings>,
    lexer:  Arc<LexerSettings>,
}

impl Settings {
    pub(crate) const fn new(parser: Arc<ParserSettings>, lexer: Arc<LexerSettings>) -> Self {
        Self { parser, lexer }
    }

    /// Starts an empty operator table.
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    #[must_use]
    pub const fn parser_settings(&self) -> &Arc<ParserSettings> {
        &self.parser
    }

    #[must_use]
    pub const fn lexer_settings(&self) -> &Arc<LexerSettings> {
        &self.lexer
    }
}

impl Default for Settings {
    /// Builds the stock table: `+ -` (left), `* /` (left), `**` (right), and
    /// unary `+ -`.
    ///
    /// # Panics
    /// Never in practice: the stock table is covered by the settings tests.
    fn default() -> Self {
        defaults::default_builder().build()
                                   .expect("the stock operator table is consistent")
    }
}
