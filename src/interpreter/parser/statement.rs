use log::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses the line given to the last [`reset`](Self::reset).
    ///
    /// Grammar:
    /// ```text
    ///     line := "let" IDENTIFIER "=" expression
    ///           | expression
    ///           | ε
    /// ```
    ///
    /// # Returns
    /// - `Some(tree)` for a declaration or an expression. A declaration
    ///   becomes an [`Assign`](crate::ast::NodeTag::Assign) node.
    /// - `None` for an empty or blank line.
    ///
    /// # Errors
    /// - Any lexical error met on the line.
    /// - `MissingDeclarationName` / `MissingDeclarationAssign` for a
    ///   malformed `let`.
    /// - `UnexpectedTrailingTokens` if tokens remain after a complete
    ///   expression, e.g. `2 3`.
    pub fn parse_line(&mut self) -> ParseResult<Option<Node>> {
        let token = self.tokens.next_token()?;

        let tree = match token.kind() {
            TokenKind::End => return Ok(None),
            TokenKind::KeywordLet => self.parse_declaration()?,
            _ => {
                self.tokens.push_back()?;
                self.parse_expression()?
            },
        };

        let next = self.tokens.next_token()?;
        if !next.is_end() {
            return Err(ParseError::UnexpectedTrailingTokens { token: next.to_string() });
        }

        debug!("parsed {tree}");
        Ok(Some(tree))
    }

    /// Parses the rest of a declaration, after `let`.
    ///
    /// Grammar: `declaration := IDENTIFIER "=" expression`
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        let name = self.tokens.next_token()?;
        if name.kind() != TokenKind::Identifier {
            return Err(ParseError::MissingDeclarationName { found: name.to_string() });
        }

        let assign = self.tokens.next_token()?;
        if assign.kind() != TokenKind::Assign {
            return Err(ParseError::MissingDeclarationAssign { name:  name.text().to_string(),
                                                              found: assign.to_string(), });
        }

        let value = self.parse_expression()?;
        Ok(Node::assign(name.text(), value))
    }
}
