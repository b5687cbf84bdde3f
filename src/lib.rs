//! # intcalc
//!
//! intcalc is an integer expression calculator written in Rust.
//! It tokenizes, parses, and evaluates arithmetic expressions over
//! arbitrary-precision integers, with `let`-bound variables and a fully
//! configurable operator table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

use num::BigInt;

use crate::{error::CalcError, interpreter::session::Session};

/// Defines the structure of parsed lines.
///
/// This module declares the `Node` type and the operation enums that tag it.
/// A tree is built bottom-up by the parser and read by the evaluator.
///
/// # Responsibilities
/// - Defines node tags for operands, unary and binary operations, and
///   declarations.
/// - Enforces the number of children of each tag at construction.
/// - Reports requests for children a node does not have.
pub mod ast;
/// Provides typed errors for every stage.
///
/// This module defines all errors that can be raised while configuring
/// operators, lexing, parsing or evaluating, and the umbrella error returned
/// by the line-oriented entry points.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Separates user errors from defects in the settings or the tree.
pub mod error;
/// Orchestrates the processing of a line.
///
/// This module ties together lexing, parsing and evaluation, and exposes the
/// [`interpreter::session::Session`] used by the shell.
pub mod interpreter;
/// The operator table.
///
/// This module describes which symbols are operations, their precedence,
/// associativity and unary priorities. A table is built once and shared by
/// the tokenizer and the parser.
pub mod settings;
/// General utilities for numeric conversion.
pub mod util;

/// Evaluates every line of `source` in one fresh session and returns the
/// value of the last line that produced one.
///
/// # Errors
/// The first error met on any line.
///
/// # Examples
/// ```
/// use intcalc::evaluate_source;
/// use num::BigInt;
///
/// let source = "let x = 2 ** 10\nx - 24";
/// assert_eq!(evaluate_source(source).unwrap(), Some(BigInt::from(1000)));
///
/// // 'y' is not defined.
/// assert!(evaluate_source("let z = y + 1").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Option<BigInt>, CalcError> {
    let mut session = Session::default();
    let mut result = None;

    for line in source.lines() {
        if let Some(value) = session.run_line(line)? {
            result = Some(value);
        }
    }

    Ok(result)
}
