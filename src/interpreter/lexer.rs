use std::{fmt, sync::Arc};

use log::trace;
use logos::Logos;

use crate::{error::LexError, settings::LexerSettings};

/// Result type used by the tokenizer and token sources.
pub type LexResult<T> = Result<T, LexError>;

/// The reserved word introducing a variable declaration.
pub const KEYWORD_LET: &str = "let";

/// The kind of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the line.
    End,
    /// A run of decimal digits.
    Number,
    /// A letter followed by letters and digits.
    Identifier,
    /// A configured operation symbol.
    Operation,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `=`
    Assign,
    /// `let`
    KeywordLet,
}

/// A lexical token: its kind and the literal text it was read from.
///
/// Punctuation tokens (`(`, `)`, `=`) and the end marker carry an empty
/// text; everything else carries its lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates a token with an empty text.
    #[must_use]
    pub const fn bare(kind: TokenKind) -> Self {
        Self { kind,
               text: String::new() }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "end of input"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::Operation
            | TokenKind::KeywordLet => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexemes whose shape does not depend on the operator settings.
///
/// Operation symbols are configured at runtime and are recognized by
/// [`Lexer`] itself; everything else is matched here.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Number,
    /// Digits glued to a letter, e.g. `12ab`. Always an error.
    #[regex(r"[0-9]+[a-zA-Z]")]
    MergedNumber,
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Word,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("=")]
    Assign,
}

/// A source of tokens for one line at a time.
///
/// Implemented by the tokenizer itself and by [`RollbackLexer`], which adds
/// one token of push-back on top of any other source.
///
/// [`RollbackLexer`]: crate::interpreter::rollback::RollbackLexer
pub trait TokenSource {
    /// Returns the next token and advances.
    ///
    /// # Errors
    /// Any [`LexError`] raised while reading the token.
    fn next_token(&mut self) -> LexResult<Token>;

    /// The token most recently returned by [`next_token`](Self::next_token).
    ///
    /// # Errors
    /// [`LexError::NoTokenYet`] if nothing was read since the last reset.
    fn last_token(&self) -> LexResult<&Token>;

    /// Starts over on a new line, discarding any state of the previous one.
    fn reset(&mut self, text: &str);
}

/// Splits a line into [`Token`]s.
///
/// At each position, after skipping ASCII spaces, the first rule that applies
/// wins:
/// 1. end of line: [`TokenKind::End`];
/// 2. a digit: a maximal run of digits, which must not be followed by a
///    letter;
/// 3. a letter: a maximal run of letters and digits, `let` being a keyword;
/// 4. a character of the operator alphabet: a maximal run of such
///    characters, which must be a configured symbol;
/// 5. `(`, `)` or `=`;
/// 6. anything else is an error.
///
/// The tokenizer is single-pass: once `End` was returned, further reads fail
/// until the next [`reset`](TokenSource::reset).
///
/// # Example
/// ```
/// use intcalc::{
///     interpreter::lexer::{Lexer, TokenKind, TokenSource},
///     settings::Settings,
/// };
///
/// let settings = Settings::default();
/// let mut lexer = Lexer::new(settings.lexer_settings().clone());
/// lexer.reset("2 ** x");
///
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Number);
/// assert_eq!(lexer.next_token().unwrap().text(), "**");
/// assert_eq!(lexer.next_token().unwrap().text(), "x");
/// assert!(lexer.next_token().unwrap().is_end());
/// assert!(lexer.next_token().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    settings: Arc<LexerSettings>,
    text:     String,
    pos:      usize,
    finished: bool,
    last:     Option<Token>,
}

impl Lexer {
    #[must_use]
    pub const fn new(settings: Arc<LexerSettings>) -> Self {
        Self { settings,
               text: String::new(),
               pos: 0,
               finished: false,
               last: None }
    }

    /// The part of the line not consumed yet.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn skip_blanks(&mut self) {
        let blanks = self.rest().len() - self.rest().trim_start_matches(' ').len();
        self.pos += blanks;
    }

    /// Reads a maximal run of operator characters.
    fn lex_operation(&mut self) -> LexResult<Token> {
        let rest = self.rest();
        let len: usize = rest.chars()
                             .take_while(|&c| self.settings.is_operation_char(c))
                             .map(char::len_utf8)
                             .sum();
        let repr = &rest[..len];

        if !self.settings.is_operation(repr) {
            return Err(LexError::IllegalOperation { repr: repr.to_string() });
        }

        let token = Token::new(TokenKind::Operation, repr);
        self.pos += len;
        Ok(token)
    }

    /// Reads a number, an identifier or a punctuator.
    fn lex_fixed(&mut self) -> LexResult<Token> {
        let (token, consumed) = {
            let rest = self.rest();
            let mut lexemes = Lexeme::lexer(rest);

            let token = match lexemes.next() {
                Some(Ok(Lexeme::Number)) => Token::new(TokenKind::Number, lexemes.slice()),
                Some(Ok(Lexeme::MergedNumber)) => {
                    return Err(LexError::NumberMergedWithIdentifier { text: lexemes.slice()
                                                                                   .to_string() });
                },
                Some(Ok(Lexeme::Word)) if lexemes.slice() == KEYWORD_LET => {
                    Token::new(TokenKind::KeywordLet, KEYWORD_LET)
                },
                Some(Ok(Lexeme::Word)) => Token::new(TokenKind::Identifier, lexemes.slice()),
                Some(Ok(Lexeme::LeftParen)) => Token::bare(TokenKind::LeftParen),
                Some(Ok(Lexeme::RightParen)) => Token::bare(TokenKind::RightParen),
                Some(Ok(Lexeme::Assign)) => Token::bare(TokenKind::Assign),
                Some(Err(())) | None => {
                    return Err(LexError::UnexpectedCharacter { rest: rest.to_string() });
                },
            };
            (token, lexemes.span().end)
        };

        self.pos += consumed;
        Ok(token)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> LexResult<Token> {
        if self.finished {
            return Err(LexError::TrailingInput { rest: self.rest().to_string() });
        }

        self.skip_blanks();

        let token = match self.rest().chars().next() {
            None => {
                self.finished = true;
                Token::bare(TokenKind::End)
            },
            Some(c) if c.is_ascii_alphanumeric() => self.lex_fixed()?,
            Some(c) if self.settings.is_operation_char(c) => self.lex_operation()?,
            Some(_) => self.lex_fixed()?,
        };

        trace!("lexed {token:?}");
        self.last = Some(token.clone());
        Ok(token)
    }

    fn last_token(&self) -> LexResult<&Token> {
        self.last.as_ref().ok_or(LexError::NoTokenYet)
    }

    fn reset(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.pos = 0;
        self.finished = false;
        self.last = None;
    }
}
