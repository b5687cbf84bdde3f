use crate::{
    error::LexError,
    interpreter::lexer::{LexResult, Token, TokenSource},
};

/// Wraps a [`TokenSource`] with one token of push-back.
///
/// After [`push_back`](Self::push_back) the most recently read token is
/// returned once more by the next [`next_token`](TokenSource::next_token)
/// call, without touching the underlying source. Only a single token can be
/// pending: pushing back twice in a row, or before anything was read, is a
/// contract violation reported as [`LexError::RollbackMisuse`].
///
/// # Example
/// ```
/// use intcalc::{
///     interpreter::{
///         lexer::{Lexer, TokenSource},
///         rollback::RollbackLexer,
///     },
///     settings::Settings,
/// };
///
/// let settings = Settings::default();
/// let mut tokens = RollbackLexer::new(Lexer::new(settings.lexer_settings().clone()));
/// tokens.reset("a b");
///
/// let a = tokens.next_token().unwrap();
/// tokens.push_back().unwrap();
/// assert_eq!(tokens.next_token().unwrap(), a);
/// assert_eq!(tokens.next_token().unwrap().text(), "b");
/// ```
#[derive(Debug, Clone)]
pub struct RollbackLexer<S> {
    source:  S,
    pending: Option<Token>,
}

impl<S: TokenSource> RollbackLexer<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source,
               pending: None }
    }

    /// Makes the most recently read token reappear on the next read.
    ///
    /// # Errors
    /// [`LexError::RollbackMisuse`] if a token is already pending or nothing
    /// has been read since the last reset.
    pub fn push_back(&mut self) -> LexResult<()> {
        if self.pending.is_some() {
            return Err(LexError::RollbackMisuse);
        }

        let last = self.source
                       .last_token()
                       .map_err(|_| LexError::RollbackMisuse)?
                       .clone();
        self.pending = Some(last);
        Ok(())
    }

    /// Whether a pushed-back token is waiting to be re-read.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<S: TokenSource> TokenSource for RollbackLexer<S> {
    fn next_token(&mut self) -> LexResult<Token> {
        match self.pending.take() {
            Some(token) => Ok(token),
            None => self.source.next_token(),
        }
    }

    fn last_token(&self) -> LexResult<&Token> {
        self.source.last_token()
    }

    fn reset(&mut self, text: &str) {
        self.pending = None;
        self.source.reset(text);
    }
}
