use crate::{
    ast::{Node, Operand},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses an operand.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUMBER
    ///             | IDENTIFIER
    ///             | "(" level(0) ")"
    ///             | unary_op level(priority(unary_op) + 1)
    /// ```
    ///
    /// The operand of a unary operation is parsed at the level just above
    /// the operation's priority, so the operation binds tighter than every
    /// binary level up to its priority and looser than the ones above. A
    /// priority at or beyond the last binary level makes the operand a bare
    /// factor.
    ///
    /// # Errors
    /// - `ExpectedClosingParen` if a parenthesized expression is not closed.
    /// - `UnexpectedEndOfInput` if the line ends where an operand should be.
    /// - `UnexpectedToken` for any other token.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Node> {
        let token = self.tokens.next_token()?;

        match token.kind() {
            TokenKind::Number => Ok(Node::leaf(Operand::Number, token.text())),
            TokenKind::Identifier => Ok(Node::leaf(Operand::Variable, token.text())),
            TokenKind::LeftParen => {
                let inner = self.parse_expression()?;
                let closing = self.tokens.next_token()?;
                if closing.kind() != TokenKind::RightParen {
                    return Err(ParseError::ExpectedClosingParen { found: closing.to_string() });
                }
                Ok(inner)
            },
            TokenKind::Operation => {
                let Some(priority) = self.settings.unary_priority(token.text())? else {
                    return Err(ParseError::UnexpectedToken { token: token.to_string() });
                };
                let op = self.settings.unary_operation_of(token.text())?;
                let level = (priority + 1).min(self.settings.number_of_priorities());
                let operand = self.parse_level(level)?;
                Ok(Node::unary(op, operand))
            },
            TokenKind::End => Err(ParseError::UnexpectedEndOfInput),
            TokenKind::RightParen | TokenKind::Assign | TokenKind::KeywordLet => {
                Err(ParseError::UnexpectedToken { token: token.to_string() })
            },
        }
    }
}
