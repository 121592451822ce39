/// Parser entry points and error recovery.
///
/// Contains the program-level loop that collects statements and syntax
/// errors, the resynchronization routine, and the expression entry point.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, variables, parenthesized groups and
/// `ask` expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence ladder from logical `or` down to
/// multiplication, all left-associative.
pub mod binary;

/// Block parsing.
///
/// Parses indented blocks and the header bodies of `if`, `else` and
/// `repeat`, including the inline `:` form.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectations, identifier and text extraction, and error
/// construction shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading tokens of a line: assignments, `show`, `ask`,
/// `if`, `repeat`, blocks and expression statements.
pub mod statement;
