/// The evaluator module executes AST nodes.
///
/// The evaluator walks statements in order, evaluates expressions, keeps
/// variable state in a scope stack and talks to the host for `show` and
/// `ask`.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions depth first, left to right.
/// - Pushes and pops a scope around every block.
/// - Reports runtime errors such as unknown variables or type mismatches.
pub mod evaluator;
/// Variable scopes.
///
/// A stack of name-to-value maps with a permanent root scope. Lookups and
/// assignments walk from the innermost scope outward.
pub mod environment;
/// The interface between a running program and its surroundings.
///
/// Defines the `Host` trait together with a standard-stream host, a scripted
/// host for tests and embedding, and a closure-based host.
pub mod host;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the source line by line, tracks indentation and produces a
/// stream of tokens: operators, keywords, literals, line breaks and the
/// block-start and block-end markers that make indentation explicit.
///
/// # Responsibilities
/// - Converts each line into tokens with kind, literal and source location.
/// - Turns changes in indentation into block-start and block-end tokens.
/// - Reports unexpected characters and inconsistent indentation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the token stream. It keeps
/// going after a syntax error, so a single pass reports every error it can
/// find.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity.
/// - Records syntax errors with line numbers and resynchronizes after each.
pub mod parser;
/// Token kinds and token records produced by the lexer.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, text, booleans and the absent value, with their truthiness and
/// display rules.
pub mod value;
