use log::trace;

use crate::{
    ast::{BinaryOperation, Node},
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses the binary precedence level `priority`.
    ///
    /// Grammar:
    /// ```text
    ///     level(p) := level(p + 1) (op(p) level(p + 1))*     if p is left-associative
    ///     level(p) := level(p + 1) (op(p) level(p))?         if p is right-associative
    ///     level(n) := factor                                 n = number of levels
    /// ```
    ///
    /// A level ends at the first token that is not one of its operators; that
    /// token is pushed back for the enclosing level to inspect.
    ///
    /// # Parameters
    /// - `priority`: The level to parse, `0` being the loosest.
    ///
    /// # Returns
    /// The tree of the operand sequence at this level.
    pub(super) fn parse_level(&mut self, priority: usize) -> ParseResult<Node> {
        if priority >= self.settings.number_of_priorities() {
            return self.parse_factor();
        }

        let left = self.parse_level(priority + 1)?;

        if self.settings.is_right_associative(priority) {
            let token = self.tokens.next_token()?;

            if let Some(op) = self.binary_at(&token, priority)? {
                trace!("right-associative {op} at level {priority}");
                let right = self.parse_level(priority)?;
                return Ok(Node::binary(op, left, right));
            }

            self.tokens.push_back()?;
            return Ok(left);
        }

        let mut root = left;
        loop {
            let token = self.tokens.next_token()?;
            let Some(op) = self.binary_at(&token, priority)? else {
                break;
            };
            trace!("left-associative {op} at level {priority}");
            let right = self.parse_level(priority + 1)?;
            root = Node::binary(op, root, right);
        }

        self.tokens.push_back()?;
        Ok(root)
    }

    /// The binary operation `token` stands for, if it is an operator of the
    /// level `priority`.
    fn binary_at(&self, token: &Token, priority: usize) -> ParseResult<Option<BinaryOperation>> {
        if token.kind() == TokenKind::Operation
           && self.settings.is_binary_priority(token.text(), priority)
        {
            return Ok(Some(self.settings.binary_operation_of(token.text())?));
        }
        Ok(None)
    }
}
