use std::collections::HashMap;

use num::BigInt;

use crate::{
    ast::Node,
    error::CalcError,
    interpreter::{evaluator::Evaluator, parser::Parser},
    settings::Settings,
};

/// Processes lines one after the other, sharing one variable environment.
///
/// A blank line parses to no tree and is never handed to the evaluator.
///
/// # Example
/// ```
/// use intcalc::interpreter::session::Session;
/// use num::BigInt;
///
/// let mut session = Session::default();
/// assert_eq!(session.run_line("let x = 5").unwrap(), None);
/// assert_eq!(session.run_line("x + 1").unwrap(), Some(BigInt::from(6)));
/// assert_eq!(session.run_line("").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    parser:    Parser,
    evaluator: Evaluator,
}

impl Session {
    /// Creates a session with the given operator table and initial bindings.
    #[must_use]
    pub fn new(settings: &Settings, initial: HashMap<String, BigInt>) -> Self {
        Self { parser:    Parser::new(settings),
               evaluator: Evaluator::new(initial), }
    }

    /// Parses `line` without evaluating it.
    ///
    /// # Errors
    /// Any lexical, syntax or settings error met while parsing.
    pub fn parse(&mut self, line: &str) -> Result<Option<Node>, CalcError> {
        Ok(self.parser.reset(line).parse_line()?)
    }

    /// Evaluates a tree against this session's environment.
    ///
    /// # Errors
    /// Any evaluation error.
    pub fn evaluate(&mut self, tree: &Node) -> Result<Option<BigInt>, CalcError> {
        Ok(self.evaluator.evaluate_line(tree)?)
    }

    /// Parses and evaluates `line`.
    ///
    /// # Returns
    /// The value of an expression line, or `None` for a declaration or a
    /// blank line.
    ///
    /// # Errors
    /// The first error met; nothing is evaluated if parsing fails.
    pub fn run_line(&mut self, line: &str) -> Result<Option<BigInt>, CalcError> {
        match self.parse(line)? {
            Some(tree) => self.evaluate(&tree),
            None => Ok(None),
        }
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}
