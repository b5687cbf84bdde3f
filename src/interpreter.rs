/// The evaluator module computes the values of trees.
///
/// The evaluator traverses a tree, performs the arithmetic its tags call for
/// on arbitrary-precision integers, and manages the variable environment.
///
/// # Responsibilities
/// - Evaluates numbers, variables, unary and binary operations.
/// - Binds variables for `let` declarations.
/// - Reports undefined variables and arithmetic faults.
pub mod evaluator;
/// The lexer module tokenizes lines for the parser.
///
/// The lexer reads a line of text and produces a stream of tokens: numbers,
/// identifiers, the `let` keyword, operation symbols taken from the operator
/// settings, parentheses and `=`.
///
/// # Responsibilities
/// - Converts a line into typed tokens.
/// - Applies maximal munch to operation symbols.
/// - Reports lexical errors for malformed input.
pub mod lexer;
/// The parser module builds trees from tokens.
///
/// The parser climbs the precedence levels described by the operator
/// settings, so the same code parses any operator table.
///
/// # Responsibilities
/// - Converts tokens into trees (expressions and declarations).
/// - Applies precedence, associativity and unary priorities.
/// - Validates syntax, reporting the offending token.
pub mod parser;
/// One token of push-back over any token source.
pub mod rollback;
/// A parser and an evaluator working together on successive lines.
pub mod session;
