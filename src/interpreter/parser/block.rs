use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, synchronize},
            statement::parse_statement,
            utils::{enter, expect, expect_line_break, peek_kind, unexpected},
        },
        token::{Token, TokenKind},
    },
};

/// Parses the statements of an indented block.
///
/// The opening `BlockStart` has already been consumed. Statements are parsed
/// until the matching `BlockEnd`, which is consumed as well. Errors inside the
/// block are recorded and recovered from, so a single bad line does not
/// discard the rest of the block.
///
/// Grammar: `block := BLOCK_START statement* BLOCK_END`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the block start.
/// - `errors`: Sink for errors recovered inside the block.
/// - `line`: Line number of the statement that owns the block.
/// - `depth`: Nesting depth of the block itself.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          errors: &mut Vec<ParseError>,
                          line: usize,
                          depth: usize)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    loop {
        while tokens.next_if(|token| token.kind == TokenKind::LineBreak)
                    .is_some()
        {}

        match peek_kind(tokens) {
            TokenKind::BlockEnd => {
                tokens.next();
                break;
            },
            TokenKind::Eof => return Err(unexpected(tokens, "end of block")),
            _ => {},
        }

        match parse_statement(tokens, errors, depth) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                errors.push(e);
                synchronize(tokens);
            },
        }
    }

    Ok(Statement::Block { statements, line })
}

/// Parses the body that follows an `if`, `else` or `repeat` header.
///
/// Two forms are accepted:
/// ```text
///     <header>[:]
///         <block>
///     <header>: <statement>
/// ```
/// An inline statement is wrapped in a block so that it runs in its own scope,
/// exactly like an indented one.
///
/// # Parameters
/// - `context`: What the header was, used in error messages.
/// - `line`: Line number of the header.
/// - `depth`: How many constructs enclose the header.
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>,
                         errors: &mut Vec<ParseError>,
                         context: &str,
                         line: usize,
                         depth: usize)
                         -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if tokens.next_if(|token| token.kind == TokenKind::Colon)
             .is_some()
       && peek_kind(tokens) != TokenKind::LineBreak
    {
        let depth = enter(tokens, depth)?;
        let statement = parse_statement(tokens, errors, depth)?;
        return Ok(Statement::Block { statements: vec![statement],
                                     line });
    }

    expect_line_break(tokens, context)?;
    expect(tokens,
           TokenKind::BlockStart,
           &format!("an indented block after {context}"))?;

    let depth = enter(tokens, depth)?;
    parse_block(tokens, errors, line, depth)
}
