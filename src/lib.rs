//! # kodme
//!
//! kodme is a small scripting language for beginners, written in Rust.
//! Programs are plain lines of `show`, `ask`, assignments, `if` / `else` and
//! `repeat`, with indentation marking blocks.
//!
//! ```text
//! ask "How many stars?" answer
//! count = 3
//! repeat count
//!     show "*"
//! ```
//!
//! Source text goes through the lexer, the parser and the evaluator. Output
//! and input go through a [`Host`](interpreter::host::Host), so a program can
//! run against the terminal, a test script or an embedding application.

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
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::Error,
    interpreter::{evaluator::core::Context, host::Host, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent a
/// program as a tree. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the line it happened on, and every message starts with
/// `Error on line N:`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Combines them into a single [`Error`](error::Error) for whole runs.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokens, lexing, parsing, values, scopes, hosts
/// and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides the runtime context for executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a program to completion in a fresh context.
///
/// `show` output and `ask` prompts go to `host`. Pass `&mut host` to keep the
/// host for inspection after the run.
///
/// # Errors
/// Returns the lexical error, every syntax error, or the first runtime error.
/// Nothing runs when the program has a syntax error.
///
/// # Examples
/// ```
/// use kodme::{error::ErrorKind, interpreter::host::ScriptedHost};
///
/// let mut host = ScriptedHost::default();
/// kodme::run("a = 10\nb = 20\nshow a + b", &mut host).unwrap();
/// assert_eq!(host.output, vec!["30"]);
///
/// // 'x' is never assigned.
/// let err = kodme::run("y = x + 1", ScriptedHost::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Runtime);
/// ```
pub fn run(source: &str, host: impl Host) -> Result<(), Error> {
    Context::new(host).run(source)
}

/// Tokenizes and parses a program without running it.
///
/// # Errors
/// Returns the lexical error, or every syntax error found.
///
/// # Examples
/// ```
/// let statements = kodme::parse("show 1\nshow 2").unwrap();
/// assert_eq!(statements.len(), 2);
///
/// let err = kodme::parse("show )\nshow (1").unwrap_err();
/// assert_eq!(err.to_string().lines().count(), 2);
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens).into_result()?)
}
