use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_logical_or, statement::parse_statement, utils::peek_kind},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many levels of nesting the parser accepts.
///
/// Bodies, `else if` branches, parentheses, prefix `-` and operator chains
/// each count as one level. Deeper input is reported as `NestingTooDeep`
/// instead of exhausting the stack.
pub const MAX_NESTING: usize = 64;

/// The result of parsing a whole program.
///
/// Parsing never stops at the first syntax error: `statements` holds every
/// statement that was recognized and `errors` every error that was recorded,
/// in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements that parsed successfully.
    pub statements: Vec<Statement>,
    /// Syntax errors found along the way.
    pub errors:     Vec<ParseError>,
}

impl Program {
    /// Returns the statements if no syntax error was recorded.
    ///
    /// # Errors
    /// Returns every recorded error otherwise.
    pub fn into_result(self) -> Result<Vec<Statement>, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.statements)
        } else {
            Err(self.errors)
        }
    }
}

/// Parses a token stream into a program.
///
/// Stray line breaks between statements are skipped. When a statement fails to
/// parse, its error is recorded and the parser resynchronizes with
/// [`synchronize`] before continuing, so one pass reports as many errors as
/// possible. A token stream that does not end in an `Eof` token is parsed as
/// if it did.
///
/// # Example
/// ```
/// use kodme::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("show 1 +\nshow 2\nshow )").unwrap();
/// let program = parse_program(&tokens);
///
/// assert_eq!(program.statements.len(), 1);
/// assert_eq!(program.errors.len(), 2);
/// ```
#[must_use]
pub fn parse_program(tokens: &[Token]) -> Program {
    let end = Token::bare(TokenKind::Eof, 0, 0, tokens.last().map_or(1, |token| token.line));
    let terminator = match tokens.last() {
        Some(token) if token.kind == TokenKind::Eof => None,
        _ => Some(&end),
    };
    let mut iter = tokens.iter().chain(terminator).peekable();
    let mut program = Program::default();

    loop {
        while iter.next_if(|token| token.kind == TokenKind::LineBreak)
                  .is_some()
        {}

        match peek_kind(&mut iter) {
            TokenKind::Eof => break,
            TokenKind::BlockEnd => {
                if let Some(token) = iter.next() {
                    program.errors
                           .push(ParseError::UnexpectedToken { expected: "a statement".to_string(),
                                                               found:    token.to_string(),
                                                               line:     token.line, });
                }
                continue;
            },
            _ => {},
        }

        match parse_statement(&mut iter, &mut program.errors, 0) {
            Ok(statement) => program.statements.push(statement),
            Err(e) => {
                program.errors.push(e);
                synchronize(&mut iter);
            },
        }
    }

    program
}

/// Skips tokens after a syntax error until a safe point to resume.
///
/// Consumes tokens up to and including the next line break. Stops early, without
/// consuming, in front of a statement keyword (`if`, `show`, `ask`, `repeat`)
/// or an indentation token, so the block structure the lexer produced stays
/// balanced.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.peek() {
        match token.kind {
            TokenKind::Eof | TokenKind::BlockStart | TokenKind::BlockEnd => return,
            TokenKind::LineBreak => {
                tokens.next();
                return;
            },
            kind if kind.starts_statement() => return,
            _ => {
                tokens.next();
            },
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy. `depth` is the nesting level of
/// the surrounding construct.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens, depth)
}
