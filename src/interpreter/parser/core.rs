use std::sync::Arc;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenSource},
        rollback::RollbackLexer,
    },
    settings::{ParserSettings, Settings},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Builds trees from lines of text.
///
/// The parser is driven entirely by its [`ParserSettings`]: the number of
/// precedence levels, which symbol belongs to which level, associativity and
/// unary priorities all come from there. It reads tokens through a
/// [`RollbackLexer`], so it never looks more than one token ahead.
///
/// One parser handles any number of lines; call [`reset`](Self::reset)
/// before each.
///
/// # Example
/// ```
/// use intcalc::interpreter::parser::Parser;
///
/// let mut parser = Parser::default();
/// let tree = parser.reset("1 + 2 * 3").parse_line().unwrap().unwrap();
/// assert_eq!(tree.to_string(), "(PLUS 1 (MULT 2 3))");
///
/// assert!(parser.reset("   ").parse_line().unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Parser<S = Lexer> {
    pub(super) tokens:   RollbackLexer<S>,
    pub(super) settings: Arc<ParserSettings>,
}

impl Parser<Lexer> {
    /// Creates a parser reading through the standard tokenizer.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self::with_source(Lexer::new(Arc::clone(settings.lexer_settings())),
                          Arc::clone(settings.parser_settings()))
    }
}

impl Default for Parser<Lexer> {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser over an arbitrary token source.
    #[must_use]
    pub const fn with_source(source: S, settings: Arc<ParserSettings>) -> Self {
        Self { tokens: RollbackLexer::new(source),
               settings }
    }

    /// Prepares the parser for a new line.
    pub fn reset(&mut self, line: &str) -> &mut Self {
        self.tokens.reset(line);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parses a full expression, starting at the loosest precedence level.
    ///
    /// Grammar: `expression := level(0)`
    pub(super) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_level(0)
    }
}
